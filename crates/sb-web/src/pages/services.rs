//! Role-specific service listings

use leptos::*;
use leptos_router::Redirect;
use sb_core::{services_for, Role, ServiceDescriptor};

use crate::components::LeadCaptureModal;
use crate::store::RoleStore;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let store = expect_context::<RoleStore>();

    // Visiting without a role redirects to selection; the page reappears
    // reactively once a role exists.
    view! {
        {move || match store.role() {
            None => view! { <Redirect path="/select-role"/> }.into_view(),
            Some(role) => view! { <ServiceList role/> }.into_view(),
        }}
    }
}

#[component]
fn ServiceList(role: Role) -> impl IntoView {
    let show_beta = create_rw_signal(false);
    let services = services_for(role);

    view! {
        <div>
            // Hero with anchor chips
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-16">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-4">
                            {format!("{role} Services")}
                        </h1>
                        <p class="text-xl text-gray-300 mb-8">{role.tagline()}</p>
                        <div class="flex flex-wrap justify-center gap-2">
                            {services.iter().map(|service| {
                                let anchor = format!("#{}", service.id);
                                view! {
                                    <a
                                        href=anchor
                                        class="px-3 py-1.5 bg-white/10 hover:bg-white/20 text-sm rounded-full border border-white/20 transition"
                                    >
                                        {service.title.clone()}
                                    </a>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </section>

            // One section per service, in catalog order
            <section class="py-16 bg-gray-50">
                <div class="container mx-auto px-4 space-y-12">
                    {services.iter().map(|service| view! {
                        <ServiceSection service=service.clone()/>
                    }).collect_view()}
                </div>
            </section>

            // CTA
            <section class="py-16 bg-gradient-to-r from-cyan-600 to-blue-600 text-white">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl font-bold mb-4">"Want early access to these services?"</h2>
                    <p class="text-lg text-cyan-100 mb-8">
                        "Join the beta and tell us which ones matter to you."
                    </p>
                    <button
                        class="px-8 py-4 bg-white text-blue-600 font-semibold rounded-lg hover:bg-gray-100 transition"
                        on:click=move |_| show_beta.set(true)
                    >
                        "Join the Beta"
                    </button>
                </div>
            </section>

            <Show when=move || show_beta.get()>
                <LeadCaptureModal role open=show_beta/>
            </Show>
        </div>
    }
}

#[component]
fn ServiceSection(service: ServiceDescriptor) -> impl IntoView {
    view! {
        <div id=service.id.clone() class="max-w-5xl mx-auto bg-white rounded-2xl shadow-lg p-8 scroll-mt-24">
            <div class="mb-6">
                <h2 class="text-3xl font-bold text-gray-900 mb-2">{service.title.clone()}</h2>
                <p class="text-lg text-gray-600">{service.description.clone()}</p>
            </div>

            <div class="grid md:grid-cols-2 gap-10">
                <div>
                    <h3 class="text-sm font-semibold text-gray-500 uppercase mb-4">"How it works"</h3>
                    <ol class="space-y-4">
                        {service.flow.iter().map(|step| view! {
                            <li class="flex items-start">
                                <span class="flex-shrink-0 w-8 h-8 bg-indigo-600 text-white rounded-full flex items-center justify-center font-bold mr-3">
                                    {step.number}
                                </span>
                                <div>
                                    <p class="font-medium text-gray-900">{step.title.clone()}</p>
                                    <p class="text-sm text-gray-600">{step.detail.clone()}</p>
                                </div>
                            </li>
                        }).collect_view()}
                    </ol>
                </div>
                <div>
                    <h3 class="text-sm font-semibold text-gray-500 uppercase mb-4">"What you get"</h3>
                    <ul class="space-y-3">
                        {service.benefits.iter().map(|benefit| view! {
                            <li class="flex items-center text-gray-700">
                                <span class="text-green-500 mr-2">"✓"</span>
                                {benefit.clone()}
                            </li>
                        }).collect_view()}
                    </ul>
                    <div class="flex flex-wrap gap-2 mt-6">
                        {service.tags.iter().map(|tag| view! {
                            <span class="px-2 py-1 bg-indigo-50 text-indigo-700 text-xs rounded-full">
                                {tag.clone()}
                            </span>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
