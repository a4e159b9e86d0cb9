//! Rooms / Complaints / Notices tab triggers.

use leptos::prelude::*;

use crate::state::ui::DashboardTab;

#[component]
pub fn TabBar(active: RwSignal<DashboardTab>) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {DashboardTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || {
                                if active.get() == tab { "tab-bar__trigger tab-bar__trigger--active" } else { "tab-bar__trigger" }
                            }
                            role="tab"
                            aria-selected=move || if active.get() == tab { "true" } else { "false" }
                            on:click=move |_| active.set(tab)
                        >
                            <span class=format!("icon icon--{}", tab.icon()) aria-hidden="true"></span>
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
