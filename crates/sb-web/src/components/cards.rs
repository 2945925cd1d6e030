//! Card components for marketing pages

use leptos::*;
use sb_core::Role;

#[component]
pub fn StepCard(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="w-12 h-12 bg-indigo-600 text-white rounded-full flex items-center justify-center text-xl font-bold mx-auto mb-4">
                {number}
            </div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn RoleCard(
    role: Role,
    icon: &'static str,
    #[prop(into)] on_select: Callback<Role>,
) -> impl IntoView {
    view! {
        <button
            class="bg-white rounded-xl shadow-lg p-8 text-center hover:shadow-xl hover:-translate-y-1 transition cursor-pointer w-full"
            on:click=move |_| on_select.call(role)
        >
            <div class="text-5xl mb-4">{icon}</div>
            <h3 class="text-2xl font-semibold text-gray-900 mb-2">{role.as_str()}</h3>
            <p class="text-gray-600">{role.tagline()}</p>
        </button>
    }
}

#[component]
pub fn BenefitCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 text-center">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

/// Colored chip for a role, used in dashboard tables
#[component]
pub fn RoleBadge(role: Role) -> impl IntoView {
    let (bg, text) = match role {
        Role::Student => ("bg-blue-100", "text-blue-800"),
        Role::Institute => ("bg-purple-100", "text-purple-800"),
        Role::Industry => ("bg-amber-100", "text-amber-800"),
    };

    view! {
        <span class=format!("px-2 py-1 text-xs font-medium rounded-full {} {}", bg, text)>
            {role.as_str()}
        </span>
    }
}
