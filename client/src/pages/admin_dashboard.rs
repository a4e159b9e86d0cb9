//! Admin dashboard: overview stats plus room, complaint, and notice
//! management.
//!
//! Every management control is a mock. Status selectors and the notice form
//! only raise a notification; the sample lists never change.

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;
use crate::components::notice_dialog::NoticeDialogModal;
use crate::components::notice_list::NoticeList;
use crate::components::room_card::AdminRoomCard;
use crate::components::stats_grid::StatsGrid;
use crate::components::status_badge::StatusBadge;
use crate::components::tab_bar::TabBar;
use crate::state::complaint::complaint_update_notification;
use crate::state::notice::NoticeDialog;
use crate::state::records::{AdminComplaint, ComplaintStatus, admin_complaints, admin_rooms};
use crate::state::toast::ToastState;
use crate::state::ui::DashboardTab;
use crate::util::badge::priority_color;

#[component]
pub fn AdminDashboard(user_id: String, on_logout: Callback<()>) -> impl IntoView {
    let tab = RwSignal::new(DashboardTab::default());
    let dialog = RwSignal::new(NoticeDialog::default());

    view! {
        <div class="dashboard">
            <DashboardHeader title="Admin Dashboard" icon="shield" user_id=user_id on_logout=on_logout/>
            <main class="dashboard__body">
                <StatsGrid/>
                <TabBar active=tab/>
                {move || match tab.get() {
                    DashboardTab::Rooms => view! { <RoomsTab/> }.into_any(),
                    DashboardTab::Complaints => view! { <ComplaintsTab/> }.into_any(),
                    DashboardTab::Notices => view! { <NoticesTab dialog=dialog/> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn RoomsTab() -> impl IntoView {
    view! {
        <section class="tab-panel">
            <div class="tab-panel__heading">
                <h2 class="tab-panel__title">"Room Management"</h2>
                <button class="btn btn--primary">
                    <span class="icon icon--plus" aria-hidden="true"></span>
                    "Add Room"
                </button>
            </div>
            <div class="card-grid">
                {admin_rooms().into_iter().map(|room| view! { <AdminRoomCard room=room/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ComplaintsTab() -> impl IntoView {
    view! {
        <section class="tab-panel">
            <h2 class="tab-panel__title">"Complaint Management"</h2>
            <div class="stack">
                {admin_complaints().into_iter().map(|c| view! { <ComplaintCard complaint=c/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ComplaintCard(complaint: AdminComplaint) -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let complaint_id = complaint.id;

    let on_status = move |ev: leptos::ev::Event| {
        if let Some(status) = ComplaintStatus::from_keyword(&event_target_value(&ev)) {
            toast.update(|t| t.show(complaint_update_notification(complaint_id, status)));
        }
    };

    view! {
        <div class="card">
            <div class="card__header">
                <div class="card__row card__row--top">
                    <div>
                        <div class="card__badges">
                            <span
                                class=format!("icon icon--alert {}", priority_color(complaint.priority.as_str()).text_class())
                                aria-hidden="true"
                            ></span>
                            <h3 class="card__title">{complaint.kind}</h3>
                            <StatusBadge keyword=complaint.priority.as_str()/>
                        </div>
                        <p class="card__description">
                            {format!("Student: {} • {}", complaint.student, complaint.date)}
                        </p>
                    </div>
                    <StatusBadge keyword=complaint.status.as_str()/>
                </div>
            </div>
            <div class="card__content">
                <p class="text--muted">{complaint.description}</p>
                <div class="card__actions">
                    <select class="select--compact" aria-label="Update Status" on:change=on_status>
                        <option value="" selected=true disabled=true>"Update Status"</option>
                        {ComplaintStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                    <button class="btn btn--outline btn--sm">"View Details"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn NoticesTab(dialog: RwSignal<NoticeDialog>) -> impl IntoView {
    view! {
        <section class="tab-panel">
            <div class="tab-panel__heading">
                <h2 class="tab-panel__title">"Notice Management"</h2>
                <button class="btn btn--primary" on:click=move |_| dialog.update(NoticeDialog::open)>
                    <span class="icon icon--plus" aria-hidden="true"></span>
                    "Post Notice"
                </button>
            </div>
            <NoticeDialogModal dialog=dialog/>
            <NoticeList manage=true/>
        </section>
    }
}
