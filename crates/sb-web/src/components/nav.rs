//! Site navigation component

use leptos::*;
use sb_core::Role;

use crate::store::RoleStore;

#[component]
pub fn Nav() -> impl IntoView {
    let store = expect_context::<RoleStore>();
    let (mobile_open, set_mobile_open) = create_signal(false);

    let role_chip = {
        let store = store.clone();
        move || {
            store.role().map(|role: Role| {
                view! {
                    <a
                        href="/select-role"
                        class="hidden lg:flex items-center px-3 py-1 bg-indigo-50 text-indigo-700 text-sm rounded-full hover:bg-indigo-100 transition"
                        title="Change role"
                    >
                        {format!("Browsing as {role}")}
                    </a>
                }
            })
        }
    };

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="flex items-center">
                            <span class="text-2xl mr-2">"🎓"</span>
                            <span class="text-xl font-bold text-gray-900">"SkillBridge"</span>
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        <a href="/services" class="text-gray-600 hover:text-gray-900 transition">"Services"</a>
                        <a href="/about" class="text-gray-600 hover:text-gray-900 transition">"About"</a>
                        <a href="/dashboard" class="text-gray-600 hover:text-gray-900 transition">"Dashboard"</a>
                        {role_chip}
                        <a href="/select-role" class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white font-medium rounded-lg transition">
                            "Get Started"
                        </a>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        <a href="/services" class="block text-gray-600 hover:text-gray-900">"Services"</a>
                        <a href="/about" class="block text-gray-600 hover:text-gray-900">"About"</a>
                        <a href="/dashboard" class="block text-gray-600 hover:text-gray-900">"Dashboard"</a>
                        <div class="pt-4 border-t border-gray-200">
                            <a href="/select-role" class="block w-full text-center px-4 py-2 bg-indigo-600 text-white font-medium rounded-lg">
                                "Get Started"
                            </a>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
