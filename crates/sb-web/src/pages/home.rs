//! Landing page

use leptos::*;
use leptos_router::use_navigate;
use sb_client::ApiClient;
use sb_core::services_for;
use std::time::Duration;

use crate::components::{BenefitCard, LeadCaptureModal, StepCard};
use crate::store::RoleStore;

/// The landing counter is cosmetic; poll it slower than the dashboard
const COUNT_POLL_SECS: u64 = 60;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<RoleStore>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let (joined, set_joined) = create_signal(None::<u64>);
    let show_beta = create_rw_signal(false);

    let fetch_count = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.beta_count().await {
                    Ok(n) => {
                        set_joined.try_set(Some(n));
                    }
                    Err(err) => tracing::warn!(error = %err, "visitor count fetch failed"),
                }
            });
        }
    };
    fetch_count();
    if let Ok(handle) =
        set_interval_with_handle(fetch_count, Duration::from_secs(COUNT_POLL_SECS))
    {
        on_cleanup(move || handle.clear());
    }

    let on_join = {
        let store = store.clone();
        move |_| {
            if store.role().is_some() {
                show_beta.set(true);
            } else {
                navigate("/select-role", Default::default());
            }
        }
    };

    let role_preview = {
        let store = store.clone();
        move || {
            store.role().map(|role| {
                view! {
                    <section class="py-16 bg-gray-50">
                        <div class="container mx-auto px-4">
                            <div class="flex items-end justify-between max-w-5xl mx-auto mb-8">
                                <h2 class="text-3xl font-bold text-gray-900">
                                    {format!("Picked for you as a {role}")}
                                </h2>
                                <a href="/services" class="text-indigo-600 hover:text-indigo-800 font-medium">
                                    "See all services →"
                                </a>
                            </div>
                            <div class="grid md:grid-cols-3 gap-6 max-w-5xl mx-auto">
                                {services_for(role).iter().take(3).map(|service| {
                                    let anchor = format!("/services#{}", service.id);
                                    view! {
                                        <a href=anchor class="bg-white rounded-xl shadow p-6 hover:shadow-lg transition block">
                                            <h3 class="text-xl font-semibold text-gray-900 mb-2">{service.title.clone()}</h3>
                                            <p class="text-gray-600 text-sm">{service.description.clone()}</p>
                                        </a>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    </section>
                }
            })
        }
    };

    let modal = {
        let store = store.clone();
        move || {
            store
                .role()
                .map(|role| view! { <LeadCaptureModal role open=show_beta/> })
        }
    };

    view! {
        <div>
            // Hero Section
            <section class="bg-gradient-to-br from-indigo-900 via-purple-900 to-indigo-800 text-white">
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-4xl mx-auto text-center">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6">
                            "One Bridge From Campus To "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-400">
                                "Career"
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-300 mb-8">
                            "SkillBridge connects students, institutes, and companies on one platform — "
                            "counselling, placements, hiring pipelines, and everything between."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <button
                                class="px-8 py-4 bg-cyan-500 hover:bg-cyan-400 text-white font-semibold rounded-lg transition"
                                on:click=on_join
                            >
                                "Join the Beta"
                            </button>
                            <a href="/select-role" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                                "Explore Services"
                            </a>
                        </div>
                        {move || joined.get().map(|n| view! {
                            <p class="text-gray-400 mt-6">
                                {format!("{n}+ people have already joined the beta")}
                            </p>
                        })}
                    </div>
                </div>
            </section>

            // How It Works
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "How It Works"
                        </h2>
                        <p class="text-lg text-gray-600">
                            "Three steps from signing up to getting matched with what you need."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        <StepCard
                            number="1"
                            title="Pick your role"
                            description="Student, institute, or company — the whole platform reshapes itself around who you are."
                        />
                        <StepCard
                            number="2"
                            title="Join the beta"
                            description="A two-minute signup puts you on the early-access list for the services you pick."
                        />
                        <StepCard
                            number="3"
                            title="Get matched"
                            description="We line up counsellors, drives, or candidates — whichever side of the bridge you're on."
                        />
                    </div>
                </div>
            </section>

            {role_preview}

            // Why SkillBridge
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "Why SkillBridge"
                        </h2>
                        <p class="text-lg text-gray-600">
                            "Placement season shouldn't run on spreadsheets, cold emails, and luck."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        <BenefitCard
                            icon="🎯"
                            title="Built for all three sides"
                            description="Students, placement cells, and recruiters work the same funnel instead of talking past each other."
                        />
                        <BenefitCard
                            icon="📊"
                            title="Signal over noise"
                            description="Standardized assessments and verified profiles replace keyword-matched resumes."
                        />
                        <BenefitCard
                            icon="🤝"
                            title="Relationships that persist"
                            description="Tie-ups, pipelines, and mentorships that outlast a single hiring season."
                        />
                    </div>
                </div>
            </section>

            // CTA Section
            <section class="py-20 bg-gradient-to-r from-cyan-600 to-blue-600 text-white">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">
                        "Ready to Cross the Bridge?"
                    </h2>
                    <p class="text-xl text-cyan-100 mb-8 max-w-2xl mx-auto">
                        "Beta access is free while we build. Tell us who you are and we'll take it from there."
                    </p>
                    <a href="/select-role" class="inline-block px-8 py-4 bg-white text-blue-600 font-semibold rounded-lg hover:bg-gray-100 transition">
                        "Get Started Free"
                    </a>
                </div>
            </section>

            <Show when=move || show_beta.get()>
                {modal.clone()}
            </Show>
        </div>
    }
}
