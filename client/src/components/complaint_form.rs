//! Student "Submit New Complaint" card.

use leptos::prelude::*;

use crate::state::complaint::ComplaintDraft;
use crate::state::records::{COMPLAINT_KINDS, Priority};
use crate::state::toast::ToastState;

#[component]
pub fn ComplaintForm(draft: RwSignal<ComplaintDraft>) -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match draft.try_update(ComplaintDraft::submit) {
            Some(Ok(note)) => toast.update(|t| t.show(note)),
            Some(Err(e)) => log::debug!("complaint submit ignored: {e}"),
            None => {}
        }
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Submit New Complaint"</h3>
                <p class="card__description">"Report issues or request maintenance"</p>
            </div>
            <div class="card__content">
                <form class="form" on:submit=on_submit>
                    <div class="form__grid">
                        <div class="form__field">
                            <label for="complaint-type">"Complaint Type"</label>
                            <select
                                id="complaint-type"
                                prop:value=move || draft.with(|d| d.kind.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.kind = value);
                                }
                            >
                                <option value="" disabled=true>"Select type"</option>
                                {COMPLAINT_KINDS
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form__field">
                            <label for="complaint-priority">"Priority"</label>
                            <PrioritySelect
                                id="complaint-priority"
                                value=Signal::derive(move || draft.with(|d| d.priority))
                                on_change=Callback::new(move |p: Priority| draft.update(|d| d.priority = p))
                            />
                        </div>
                    </div>
                    <div class="form__field">
                        <label for="complaint-description">"Description"</label>
                        <textarea
                            id="complaint-description"
                            rows="3"
                            placeholder="Describe the issue in detail..."
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.description = value);
                            }
                        ></textarea>
                    </div>
                    <button class="btn btn--primary" type="submit">"Submit Complaint"</button>
                </form>
            </div>
        </div>
    }
}

/// Low / Medium / High selector shared by the complaint and notice forms.
#[component]
pub fn PrioritySelect(id: &'static str, value: Signal<Priority>, on_change: Callback<Priority>) -> impl IntoView {
    view! {
        <select
            id=id
            prop:value=move || value.get().as_str()
            on:change=move |ev| {
                if let Some(p) = Priority::from_keyword(&event_target_value(&ev)) {
                    on_change.run(p);
                }
            }
        >
            {Priority::ALL
                .into_iter()
                .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                .collect_view()}
        </select>
    }
}
