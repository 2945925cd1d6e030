//! Site footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    <div>
                        <div class="flex items-center mb-4">
                            <span class="text-2xl mr-2">"🎓"</span>
                            <span class="text-xl font-bold text-white">"SkillBridge"</span>
                        </div>
                        <p class="text-sm">
                            "Connecting students, institutes, and industry on one platform."
                        </p>
                    </div>
                    <div>
                        <h3 class="text-white font-semibold mb-4">"Explore"</h3>
                        <ul class="space-y-2 text-sm">
                            <li><a href="/services" class="hover:text-white transition">"Services"</a></li>
                            <li><a href="/select-role" class="hover:text-white transition">"Get Started"</a></li>
                            <li><a href="/about" class="hover:text-white transition">"About"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-white font-semibold mb-4">"Contact"</h3>
                        <ul class="space-y-2 text-sm">
                            <li>"hello@skillbridge.example"</li>
                            <li>"+91 99200 00000"</li>
                        </ul>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-sm text-center">
                    "© 2026 SkillBridge. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
