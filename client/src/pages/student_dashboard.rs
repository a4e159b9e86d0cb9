//! Student dashboard: room availability, complaints, notices.

use leptos::prelude::*;

use crate::components::complaint_form::ComplaintForm;
use crate::components::dashboard_header::DashboardHeader;
use crate::components::notice_list::NoticeList;
use crate::components::room_card::StudentRoomCard;
use crate::components::status_badge::StatusBadge;
use crate::components::tab_bar::TabBar;
use crate::state::complaint::ComplaintDraft;
use crate::state::records::{student_complaints, student_rooms};
use crate::state::ui::DashboardTab;

#[component]
pub fn StudentDashboard(user_id: String, on_logout: Callback<()>) -> impl IntoView {
    let tab = RwSignal::new(DashboardTab::default());
    // Outlives tab switches so a half-written complaint survives them.
    let draft = RwSignal::new(ComplaintDraft::default());

    view! {
        <div class="dashboard">
            <DashboardHeader title="Student Dashboard" icon="home" user_id=user_id on_logout=on_logout/>
            <main class="dashboard__body">
                <TabBar active=tab/>
                {move || match tab.get() {
                    DashboardTab::Rooms => view! { <RoomsTab/> }.into_any(),
                    DashboardTab::Complaints => view! { <ComplaintsTab draft=draft/> }.into_any(),
                    DashboardTab::Notices => {
                        view! {
                            <section class="tab-panel">
                                <h2 class="tab-panel__title">"Important Notices"</h2>
                                <NoticeList manage=false/>
                            </section>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn RoomsTab() -> impl IntoView {
    view! {
        <section class="tab-panel">
            <h2 class="tab-panel__title">"Room Availability"</h2>
            <div class="card-grid">
                {student_rooms().into_iter().map(|room| view! { <StudentRoomCard room=room/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ComplaintsTab(draft: RwSignal<ComplaintDraft>) -> impl IntoView {
    view! {
        <section class="tab-panel">
            <ComplaintForm draft=draft/>
            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"My Complaints"</h3>
                    <p class="card__description">"Track your submitted complaints"</p>
                </div>
                <div class="card__content list">
                    {student_complaints()
                        .into_iter()
                        .map(|c| {
                            view! {
                                <div class="list__row">
                                    <div>
                                        <p class="list__primary">{c.description}</p>
                                        <p class="text--muted">{format!("{} • {}", c.kind, c.date)}</p>
                                    </div>
                                    <StatusBadge keyword=c.status.as_str()/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
