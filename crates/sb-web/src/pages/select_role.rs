//! Role selection page

use leptos::*;
use leptos_router::use_navigate;
use sb_core::Role;

use crate::components::RoleCard;
use crate::store::RoleStore;

#[component]
pub fn SelectRolePage() -> impl IntoView {
    let store = expect_context::<RoleStore>();
    let navigate = use_navigate();

    let on_select = Callback::new(move |role: Role| {
        store.set(role);
        navigate("/services", Default::default());
    });

    view! {
        <div class="bg-gray-50 py-20 min-h-[70vh]">
            <div class="container mx-auto px-4">
                <div class="max-w-3xl mx-auto text-center mb-12">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">
                        "Tell Us Who You Are"
                    </h1>
                    <p class="text-lg text-gray-600">
                        "Everything — services, signup, even the questions we ask — depends on your side of the bridge."
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    <RoleCard role=Role::Student icon="🎓" on_select/>
                    <RoleCard role=Role::Institute icon="🏛️" on_select/>
                    <RoleCard role=Role::Industry icon="🏢" on_select/>
                </div>
                <p class="text-center text-sm text-gray-400 mt-10">
                    "You can switch roles anytime from the navigation bar."
                </p>
            </div>
        </div>
    }
}
