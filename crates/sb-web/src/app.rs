//! Main application component

use leptos::*;
use leptos_router::*;
use sb_client::ApiClient;

use crate::components::*;
use crate::pages::*;
use crate::store::RoleStore;

#[component]
pub fn App() -> impl IntoView {
    provide_context(RoleStore::browser());
    provide_context(ApiClient::default());

    view! {
        <Router>
            <div class="min-h-screen bg-white flex flex-col">
                <Nav/>
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/about" view=AboutPage/>
                        <Route path="/select-role" view=SelectRolePage/>
                        <Route path="/services" view=ServicesPage/>
                        <Route path="/dashboard" view=DashboardPage/>
                    </Routes>
                </main>
                <Footer/>
                <ContactFab/>
            </div>
        </Router>
    }
}
