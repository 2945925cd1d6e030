//! Internal metrics dashboard

use futures::future::try_join3;
use leptos::*;
use sb_client::ApiClient;
use sb_core::{BetaUser, DashboardSnapshot, InterestSubmission};
use std::time::Duration;

use crate::components::RoleBadge;

const REFRESH_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Signups,
    Interests,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let (snapshot, set_snapshot) = create_signal(None::<DashboardSnapshot>);
    let (error, set_error) = create_signal(None::<String>);
    let (refreshing, set_refreshing) = create_signal(false);
    let (tab, set_tab) = create_signal(Tab::Overview);

    // One refresh path for mount, the 30s timer, and the button. The three
    // reads land together or not at all: any failure keeps the previous
    // snapshot and only raises the banner.
    let refresh = {
        let api = api.clone();
        move || {
            if refreshing.get_untracked() {
                return;
            }
            set_refreshing.set(true);
            let api = api.clone();
            spawn_local(async move {
                let result = try_join3(
                    api.list_beta_users(),
                    api.list_interest_submissions(),
                    api.beta_count(),
                )
                .await;
                match result {
                    Ok((users, submissions, total)) => {
                        set_snapshot
                            .try_set(Some(DashboardSnapshot::compute(users, submissions, total)));
                        set_error.try_set(None);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "dashboard refresh failed; keeping previous snapshot");
                        set_error.try_set(Some(err.to_string()));
                    }
                }
                set_refreshing.try_set(false);
            });
        }
    };

    refresh();
    if let Ok(handle) =
        set_interval_with_handle(refresh.clone(), Duration::from_secs(REFRESH_INTERVAL_SECS))
    {
        on_cleanup(move || handle.clear());
    }

    let manual_refresh = refresh.clone();

    let tab_button = move |this: Tab, label: &'static str| {
        view! {
            <button
                class=move || {
                    if tab.get() == this {
                        "px-4 py-2 text-sm font-medium rounded-lg bg-indigo-600 text-white"
                    } else {
                        "px-4 py-2 text-sm font-medium rounded-lg text-gray-600 hover:bg-gray-200"
                    }
                }
                on:click=move |_| set_tab.set(this)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="bg-gray-100 min-h-screen">
            <div class="container mx-auto px-4 py-8 space-y-6">
                <div class="flex justify-between items-center">
                    <h1 class="text-3xl font-bold text-gray-900">"Beta Dashboard"</h1>
                    <button
                        class="bg-indigo-600 hover:bg-indigo-700 disabled:bg-indigo-300 text-white px-4 py-2 rounded-lg transition"
                        prop:disabled=refreshing
                        on:click=move |_| manual_refresh()
                    >
                        {move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}
                    </button>
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="p-3 bg-amber-50 border border-amber-200 text-amber-800 text-sm rounded-lg">
                        {move || format!(
                            "Refresh failed ({}). Showing the last loaded data; retrying automatically.",
                            error.get().unwrap_or_default()
                        )}
                    </div>
                </Show>

                <div class="flex space-x-2">
                    {tab_button(Tab::Overview, "Overview")}
                    {tab_button(Tab::Signups, "Beta Signups")}
                    {tab_button(Tab::Interests, "Service Interest")}
                </div>

                {move || match snapshot.get() {
                    None => view! {
                        <div class="bg-white rounded-lg shadow p-12 text-center text-gray-500">
                            "Loading dashboard data..."
                        </div>
                    }
                    .into_view(),
                    Some(snap) => match tab.get() {
                        Tab::Overview => view! { <OverviewTab snap/> }.into_view(),
                        Tab::Signups => view! { <SignupsTable users=snap.users/> }.into_view(),
                        Tab::Interests => {
                            view! { <InterestsTable submissions=snap.submissions/> }.into_view()
                        }
                    },
                }}
            </div>
        </div>
    }
}

#[component]
fn OverviewTab(snap: DashboardSnapshot) -> impl IntoView {
    let submissions = snap.submissions.len();
    let slices = snap.role_slices.clone();

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard
                    title="Total Beta Signups"
                    value=snap.total_count.to_string()
                    icon="👥"
                />
                <StatCard
                    title="Survey Submissions"
                    value=submissions.to_string()
                    icon="📋"
                />
                <StatCard
                    title="Survey Completion"
                    value=format!("{}%", snap.completion_rate)
                    icon="✅"
                />
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"Signups by Role"</h2>
                <div class="space-y-4">
                    {slices.into_iter().map(|slice| {
                        let width = format!("width: {:.0}%", slice.percent);
                        view! {
                            <div>
                                <div class="flex justify-between text-sm mb-1">
                                    <span class="font-medium text-gray-700">{slice.role.as_str()}</span>
                                    <span class="text-gray-500">
                                        {format!("{} ({:.0}%)", slice.count, slice.percent)}
                                    </span>
                                </div>
                                <div class="w-full bg-gray-100 rounded-full h-3">
                                    <div class="bg-indigo-600 h-3 rounded-full" style=width></div>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(title: &'static str, value: String, icon: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500">{title}</p>
                    <p class="text-2xl font-bold text-gray-900">{value}</p>
                </div>
                <div class="w-12 h-12 bg-indigo-100 rounded-full flex items-center justify-center">
                    <span class="text-xl">{icon}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SignupsTable(users: Vec<BetaUser>) -> impl IntoView {
    let empty = users.is_empty();
    let users = store_value(users);

    view! {
        <div class="bg-white rounded-lg shadow overflow-x-auto">
            <Show
                when=move || !empty
                fallback=|| view! {
                    <p class="p-12 text-center text-gray-500">"No beta signups yet"</p>
                }
            >
                <table class="min-w-full divide-y divide-gray-200">
                    <thead>
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Name"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Email"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Role"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Institution"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Location"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Joined"</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <For
                            each=move || users.get_value()
                            key=|user| user.id.clone()
                            children=move |user| {
                                view! {
                                    <tr>
                                        <td class="px-6 py-4 whitespace-nowrap font-medium text-gray-900">{user.name.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-gray-600">{user.email.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <RoleBadge role=user.role/>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-gray-600">{user.institution.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-gray-600">{user.location.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            {user.joined_at.format("%Y-%m-%d %H:%M").to_string()}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn InterestsTable(submissions: Vec<InterestSubmission>) -> impl IntoView {
    let empty = submissions.is_empty();
    let submissions = store_value(submissions);

    view! {
        <div class="bg-white rounded-lg shadow overflow-x-auto">
            <Show
                when=move || !empty
                fallback=|| view! {
                    <p class="p-12 text-center text-gray-500">"No survey submissions yet"</p>
                }
            >
                <table class="min-w-full divide-y divide-gray-200">
                    <thead>
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Email"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Role"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Services Rated"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Submitted"</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <For
                            each=move || submissions.get_value()
                            key=|sub| sub.beta_user_id.clone()
                            children=move |sub| {
                                let submitted = sub
                                    .submitted_at
                                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                                    .unwrap_or_else(|| "—".to_string());
                                view! {
                                    <tr>
                                        <td class="px-6 py-4 whitespace-nowrap text-gray-600">{sub.email.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <RoleBadge role=sub.role/>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-gray-600">
                                            {sub.service_interests.len()}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{submitted}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
