//! Notice cards. Admins additionally see (inert) edit and delete buttons.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::state::records::notices;

#[component]
pub fn NoticeList(manage: bool) -> impl IntoView {
    view! {
        <div class="stack">
            {notices()
                .into_iter()
                .map(|notice| {
                    view! {
                        <div class="card">
                            <div class="card__header">
                                <div class="card__row">
                                    <h3 class="card__title">{notice.title}</h3>
                                    <div class="card__badges">
                                        <StatusBadge keyword=notice.priority.as_str()/>
                                        <span class="text--muted">{notice.date}</span>
                                    </div>
                                </div>
                            </div>
                            <div class="card__content">
                                <p class="text--muted">{notice.content}</p>
                                <Show when=move || manage>
                                    <div class="card__actions">
                                        <button class="btn btn--outline btn--sm">
                                            <span class="icon icon--edit" aria-hidden="true"></span>
                                            "Edit"
                                        </button>
                                        <button class="btn btn--outline btn--sm">"Delete"</button>
                                    </div>
                                </Show>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
