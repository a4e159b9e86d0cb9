//! Dashboard header with greeting and logout.

#[cfg(test)]
#[path = "dashboard_header_test.rs"]
mod dashboard_header_test;

use leptos::prelude::*;

/// Greeting line under the dashboard title.
pub fn welcome_line(user_id: &str) -> String {
    format!("Welcome back, {user_id}")
}

#[component]
pub fn DashboardHeader(
    title: &'static str,
    icon: &'static str,
    user_id: String,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <div class="dashboard-header__inner">
                <div class="dashboard-header__identity">
                    <span class=format!("icon icon--{icon} text--primary") aria-hidden="true"></span>
                    <div>
                        <h1 class="dashboard-header__title">{title}</h1>
                        <p class="dashboard-header__welcome">{welcome_line(&user_id)}</p>
                    </div>
                </div>
                <button class="btn btn--outline dashboard-header__logout" on:click=move |_| on_logout.run(())>
                    <span class="icon icon--log-out" aria-hidden="true"></span>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
