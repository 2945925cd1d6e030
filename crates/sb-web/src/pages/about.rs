//! About page

use leptos::*;

use crate::components::BenefitCard;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"About SkillBridge"</h1>
                        <p class="text-xl text-gray-300">
                            "We're building the missing infrastructure between classrooms and careers."
                        </p>
                    </div>
                </div>
            </section>

            // The problem
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "The Placement Gap"
                        </h2>
                        <p class="text-lg text-gray-600">
                            "Every year, lakhs of capable graduates miss opportunities they were qualified for, "
                            "placement cells drown in logistics, and companies re-screen the same resumes — "
                            "because the three sides never shared a common platform."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        <BenefitCard
                            icon="🎓"
                            title="For Students"
                            description="Counselling, preparation, and applications in one place — with honest signals about where you stand."
                        />
                        <BenefitCard
                            icon="🏛️"
                            title="For Institutes"
                            description="Placement drives, readiness analytics, and industry partnerships without growing the placement cell."
                        />
                        <BenefitCard
                            icon="🏢"
                            title="For Industry"
                            description="Pre-assessed candidates from hundreds of campuses through one contract and one pipeline."
                        />
                    </div>
                </div>
            </section>

            // Principles
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-4xl mx-auto">
                        <h2 class="text-3xl font-bold text-gray-900 mb-8 text-center">"How We Work"</h2>
                        <div class="space-y-6">
                            <div class="bg-white rounded-lg shadow p-6">
                                <h3 class="font-semibold text-gray-900 mb-2">"Verified over claimed"</h3>
                                <p class="text-gray-600">
                                    "Assessment scores, audited placement numbers, and tracked outcomes — "
                                    "never self-reported statistics."
                                </p>
                            </div>
                            <div class="bg-white rounded-lg shadow p-6">
                                <h3 class="font-semibold text-gray-900 mb-2">"Built with our beta community"</h3>
                                <p class="text-gray-600">
                                    "Every service we launch starts as a survey answer from a beta member. "
                                    "The roadmap is the sum of what you told us you need."
                                </p>
                            </div>
                            <div class="bg-white rounded-lg shadow p-6">
                                <h3 class="font-semibold text-gray-900 mb-2">"Free while we learn"</h3>
                                <p class="text-gray-600">
                                    "Beta access costs nothing. We'd rather earn trust first and revenue later."
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // CTA
            <section class="py-20 bg-gradient-to-r from-cyan-600 to-blue-600 text-white">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl font-bold mb-4">"Help Us Build It Right"</h2>
                    <p class="text-xl text-cyan-100 mb-8 max-w-2xl mx-auto">
                        "Join the beta and shape which services ship first."
                    </p>
                    <a href="/select-role" class="inline-block px-8 py-4 bg-white text-blue-600 font-semibold rounded-lg hover:bg-gray-100 transition">
                        "Get Started"
                    </a>
                </div>
            </section>
        </div>
    }
}
