//! Admin overview cards.

use leptos::prelude::*;

use crate::components::status_badge::PlainBadge;
use crate::state::records::ADMIN_STATS;

#[component]
pub fn StatsGrid() -> impl IntoView {
    view! {
        <div class="stats-grid">
            {ADMIN_STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="card">
                            <div class="card__content stat">
                                <div>
                                    <p class="stat__title">{stat.title}</p>
                                    <div class="stat__value-row">
                                        <p class="stat__value">{stat.value}</p>
                                        <PlainBadge label=stat.change/>
                                    </div>
                                </div>
                                <span class=format!("icon icon--lg icon--{} {}", stat.icon, stat.tone.text_class()) aria-hidden="true"></span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
