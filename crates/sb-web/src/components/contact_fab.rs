//! Floating contact button

use leptos::*;

#[component]
pub fn ContactFab() -> impl IntoView {
    let (open, set_open) = create_signal(false);

    view! {
        <div class="fixed bottom-6 right-6 z-40 flex flex-col items-end space-y-3">
            <Show when=move || open.get()>
                <div class="bg-white rounded-xl shadow-xl border border-gray-200 p-5 w-64">
                    <h3 class="font-semibold text-gray-900 mb-3">"Talk to us"</h3>
                    <div class="space-y-2 text-sm">
                        <a href="mailto:hello@skillbridge.example" class="flex items-center text-gray-600 hover:text-indigo-600">
                            <span class="mr-2">"📧"</span>
                            "hello@skillbridge.example"
                        </a>
                        <a href="tel:+919920000000" class="flex items-center text-gray-600 hover:text-indigo-600">
                            <span class="mr-2">"📞"</span>
                            "+91 99200 00000"
                        </a>
                    </div>
                    <p class="text-xs text-gray-400 mt-3">"We respond within 24 hours"</p>
                </div>
            </Show>
            <button
                class="w-14 h-14 bg-indigo-600 hover:bg-indigo-700 text-white rounded-full shadow-lg flex items-center justify-center text-2xl transition"
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                <Show when=move || open.get() fallback=|| "💬">
                    "✕"
                </Show>
            </button>
        </div>
    }
}
