//! Two-step lead-capture modal
//!
//! Hosts the `LeadFlow` state machine from `sb-core`: the signup form, the
//! transient success panel, the service-interest survey, and the closing
//! panel. The machine owns every guard; this component only renders the
//! current stage, wires inputs into the draft, performs the two POSTs, and
//! schedules the success-panel timers. All signal writes from async and
//! timer callbacks go through `try_update`/`try_set` so a response landing
//! after the modal is gone is ignored.

use leptos::*;
use sb_client::ApiClient;
use sb_core::flow::{INTEREST_SUCCESS_DELAY_MS, SIGNUP_SUCCESS_DELAY_MS};
use sb_core::{
    services_for, FieldLabels, FlowError, FlowStage, InterestLevel, LeadFlow, Role, SignupDraft,
};
use std::time::Duration;

/// Coarse stage discriminant driving which panel is mounted
///
/// Submitting states map onto their editing panel so that an in-flight
/// POST disables the form instead of remounting it (remounting would drop
/// input focus).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Signup,
    SignupDone,
    Interest,
    InterestDone,
    Closed,
}

fn panel_for(stage: &FlowStage) -> Panel {
    match stage {
        FlowStage::Signup { .. } | FlowStage::SubmittingSignup { .. } => Panel::Signup,
        FlowStage::SignupDone { .. } => Panel::SignupDone,
        FlowStage::Interest { .. } | FlowStage::SubmittingInterest { .. } => Panel::Interest,
        FlowStage::InterestDone => Panel::InterestDone,
        FlowStage::Closed => Panel::Closed,
    }
}

#[component]
pub fn LeadCaptureModal(role: Role, open: RwSignal<bool>) -> impl IntoView {
    let flow = create_rw_signal(LeadFlow::new(role));
    let (error, set_error) = create_signal(None::<String>);

    let panel = create_memo(move |_| flow.with(|f| panel_for(f.stage())));

    // The machine reaching Closed is the dismissal signal for the host.
    create_effect(move |_| {
        if flow.with(|f| f.is_closed()) {
            open.set(false);
        }
    });

    view! {
        <div class="fixed inset-0 z-50 bg-black/50 flex items-start justify-center overflow-y-auto py-10 px-4">
            <div class="bg-white rounded-2xl shadow-2xl w-full max-w-2xl relative">
                <button
                    class="absolute top-4 right-4 text-gray-400 hover:text-gray-600 text-xl"
                    on:click=move |_| open.set(false)
                >
                    "✕"
                </button>
                <div class="p-8">
                    {move || match panel.get() {
                        Panel::Signup => view! {
                            <SignupForm role flow error set_error/>
                        }
                        .into_view(),
                        Panel::SignupDone => view! { <SignupSuccess flow/> }.into_view(),
                        Panel::Interest => view! {
                            <InterestSurvey role flow error set_error/>
                        }
                        .into_view(),
                        Panel::InterestDone => view! { <SurveySuccess/> }.into_view(),
                        Panel::Closed => ().into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

/// Reactive accessor pair for one draft field
fn draft_field(
    flow: RwSignal<LeadFlow>,
    get: fn(&SignupDraft) -> &String,
    set: fn(&mut SignupDraft, String),
) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || {
        flow.with(|f| f.draft().map(|d| get(d).clone()).unwrap_or_default())
    });
    let on_input = Callback::new(move |v: String| {
        flow.update(|f| {
            if let Some(d) = f.draft_mut() {
                set(d, v);
            }
        });
    });
    (value, on_input)
}

#[component]
fn SignupForm(
    role: Role,
    flow: RwSignal<LeadFlow>,
    error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let labels = FieldLabels::for_role(role);
    let submitting = create_memo(move |_| flow.with(|f| f.is_submitting()));

    let (name, on_name) = draft_field(flow, |d| &d.name, |d, v| d.name = v);
    let (email, on_email) = draft_field(flow, |d| &d.email, |d, v| d.email = v);
    let (phone, on_phone) = draft_field(flow, |d| &d.phone, |d, v| d.phone = v);
    let (institution, on_institution) =
        draft_field(flow, |d| &d.institution, |d, v| d.institution = v);
    let (designation, on_designation) =
        draft_field(flow, |d| &d.designation, |d, v| d.designation = v);
    let (location, on_location) = draft_field(flow, |d| &d.location, |d, v| d.location = v);
    let (need, on_need) = draft_field(flow, |d| &d.specific_need, |d, v| d.specific_need = v);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match flow.try_update(|f| f.begin_signup_submit()) {
            Some(Ok(payload)) => {
                set_error.set(None);
                let api = api.clone();
                spawn_local(async move {
                    match api.join_beta(&payload).await {
                        Ok(user) => {
                            flow.try_update(|f| f.signup_succeeded(user));
                            set_timeout(
                                move || {
                                    flow.try_update(|f| f.advance_to_interest());
                                },
                                Duration::from_millis(SIGNUP_SUCCESS_DELAY_MS),
                            );
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "beta signup failed");
                            flow.try_update(|f| f.signup_failed());
                            set_error.try_set(Some(
                                "We couldn't submit your signup. Check your connection and try again."
                                    .to_string(),
                            ));
                        }
                    }
                });
            }
            Some(Err(FlowError::MissingFields(fields))) => {
                set_error.set(Some(format!("Please fill in: {}", fields.join(", "))));
            }
            // In-flight submission; the disabled button already says so.
            _ => {}
        }
    };

    view! {
        <div>
            <h2 class="text-2xl font-bold text-gray-900 mb-1">"Join the SkillBridge Beta"</h2>
            <p class="text-gray-500 mb-6">{format!("Signing up as {role}")}</p>

            <Show when=move || error.get().is_some()>
                <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 text-sm rounded-lg">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <form on:submit=on_submit class="space-y-4">
                <div class="grid md:grid-cols-2 gap-4">
                    <TextField label="Full Name" placeholder="Your name" value=name on_input=on_name disabled=submitting/>
                    <TextField label="Email" input_type="email" placeholder="you@example.com" value=email on_input=on_email disabled=submitting/>
                    <TextField label="Phone Number" input_type="tel" placeholder="+91 ..." value=phone on_input=on_phone disabled=submitting/>
                    <TextField label="Location" placeholder="City, State" value=location on_input=on_location disabled=submitting/>
                    <TextField label=labels.institution placeholder=labels.institution_placeholder value=institution on_input=on_institution disabled=submitting/>
                    <TextField label=labels.designation placeholder=labels.designation_placeholder value=designation on_input=on_designation disabled=submitting/>
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">{labels.need}</label>
                    <textarea
                        rows="3"
                        class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500"
                        placeholder=labels.need_placeholder
                        prop:value=need
                        prop:disabled=submitting
                        on:input=move |ev| on_need.call(event_target_value(&ev))
                    ></textarea>
                </div>

                <button
                    type="submit"
                    class="w-full py-4 bg-indigo-600 hover:bg-indigo-700 disabled:bg-indigo-300 text-white font-semibold rounded-lg transition"
                    prop:disabled=submitting
                >
                    {move || if submitting.get() { "Joining..." } else { "Join the Beta" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
            <input
                type=input_type
                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500"
                placeholder=placeholder
                prop:value=value
                prop:disabled=disabled
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn SignupSuccess(flow: RwSignal<LeadFlow>) -> impl IntoView {
    let name = flow.with_untracked(|f| match f.stage() {
        FlowStage::SignupDone { user } => user.name.clone(),
        _ => String::new(),
    });

    view! {
        <div class="text-center py-12">
            <div class="text-5xl mb-4">"✓"</div>
            <h3 class="text-2xl font-bold text-gray-900 mb-2">{format!("Welcome aboard, {name}!")}</h3>
            <p class="text-gray-600">
                "You're on the beta list. One more thing — tell us which services matter most to you."
            </p>
        </div>
    }
}

#[component]
fn InterestSurvey(
    role: Role,
    flow: RwSignal<LeadFlow>,
    error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let submitting = create_memo(move |_| flow.with(|f| f.is_submitting()));
    let rated = create_memo(move |_| flow.with(|f| f.rating_count()));
    let email = flow.with_untracked(|f| match f.stage() {
        FlowStage::Interest { email, .. } => email.clone(),
        _ => String::new(),
    });

    let services = services_for(role);
    let total = services.len();

    let on_submit = move |_| {
        match flow.try_update(|f| f.begin_interest_submit()) {
            Some(Ok(payload)) => {
                set_error.set(None);
                let api = api.clone();
                spawn_local(async move {
                    match api.submit_interests(&payload).await {
                        Ok(()) => {
                            flow.try_update(|f| f.interest_succeeded());
                            set_timeout(
                                move || {
                                    flow.try_update(|f| f.finish());
                                },
                                Duration::from_millis(INTEREST_SUCCESS_DELAY_MS),
                            );
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "interest submission failed");
                            flow.try_update(|f| f.interest_failed());
                            set_error.try_set(Some(
                                "We couldn't save your preferences. Your ratings are kept — try again."
                                    .to_string(),
                            ));
                        }
                    }
                });
            }
            Some(Err(FlowError::NoRatings)) => {
                set_error.set(Some("Rate at least one service before submitting.".to_string()));
            }
            _ => {}
        }
    };

    view! {
        <div>
            <h2 class="text-2xl font-bold text-gray-900 mb-1">"Which services interest you?"</h2>
            <p class="text-gray-500 mb-6">{format!("Preferences for {email}")}</p>

            <Show when=move || error.get().is_some()>
                <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 text-sm rounded-lg">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="space-y-4 max-h-96 overflow-y-auto pr-2">
                {services.iter().map(|service| {
                    let service_id = service.id.clone();
                    view! {
                        <div class="border border-gray-200 rounded-lg p-4">
                            <div class="font-medium text-gray-900">{service.title.clone()}</div>
                            <p class="text-sm text-gray-500 mt-1">{service.description.clone()}</p>
                            <div class="flex flex-wrap gap-2 mt-3">
                                {InterestLevel::ALL.iter().map(|&level| {
                                    let id = service_id.clone();
                                    let id_for_click = service_id.clone();
                                    let selected = create_memo(move |_| {
                                        flow.with(|f| f.rating(&id) == Some(level))
                                    });
                                    view! {
                                        <button
                                            type="button"
                                            class=move || rating_class(level, selected.get())
                                            prop:disabled=submitting
                                            on:click=move |_| {
                                                flow.try_update(|f| f.rate(&id_for_click, level));
                                            }
                                        >
                                            {level.label()}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="flex items-center justify-between mt-6">
                <span class="text-sm text-gray-500">
                    {move || format!("{} of {total} rated", rated.get())}
                </span>
                <button
                    class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 disabled:bg-indigo-300 text-white font-semibold rounded-lg transition"
                    prop:disabled=submitting
                    on:click=on_submit
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Preferences" }}
                </button>
            </div>
        </div>
    }
}

fn rating_class(level: InterestLevel, selected: bool) -> String {
    let base = "px-3 py-1.5 text-sm rounded-full border transition";
    let accent = if selected {
        match level {
            InterestLevel::VeryInterested => "bg-green-100 border-green-400 text-green-800",
            InterestLevel::SomewhatInterested => "bg-yellow-100 border-yellow-400 text-yellow-800",
            InterestLevel::NotInterested => "bg-gray-200 border-gray-400 text-gray-700",
        }
    } else {
        "border-gray-300 text-gray-600 hover:border-indigo-400"
    };
    format!("{base} {accent}")
}

#[component]
fn SurveySuccess() -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <div class="text-5xl mb-4">"🎉"</div>
            <h3 class="text-2xl font-bold text-gray-900 mb-2">"Thank you!"</h3>
            <p class="text-gray-600">
                "Your preferences are saved. We'll be in touch as the beta rolls out."
            </p>
        </div>
    }
}
