//! "Post New Notice" modal for the admin notices tab.

#[cfg(test)]
#[path = "notice_dialog_test.rs"]
mod notice_dialog_test;

use leptos::prelude::*;

use crate::components::complaint_form::PrioritySelect;
use crate::state::notice::NoticeDialog;
use crate::state::records::Priority;
use crate::state::toast::ToastState;

/// Modal form. Renders nothing while `dialog.open` is false.
#[component]
pub fn NoticeDialogModal(dialog: RwSignal<NoticeDialog>) -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let title_ref = NodeRef::<leptos::html::Input>::new();

    // Focus lands inside the modal on every open so Escape reaches it.
    Effect::new(move || {
        if dialog.with(|d| d.open) {
            #[cfg(feature = "hydrate")]
            {
                if let Some(input_el) = title_ref.get() {
                    let _ = input_el.focus();
                }
            }
        }
    });

    let on_close = move || dialog.update(NoticeDialog::close);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close();
        }
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match dialog.try_update(NoticeDialog::submit) {
            Some(Ok(note)) => toast.update(|t| t.show(note)),
            Some(Err(e)) => log::debug!("notice submit ignored: {e}"),
            None => {}
        }
    };

    view! {
        <Show when=move || dialog.with(|d| d.open)>
            <div class="modal__backdrop" on:click=move |_| on_close()>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="modal__header">
                        <h2>"Post New Notice"</h2>
                        <button class="modal__close" title="Close" on:click=move |_| on_close()>
                            "✕"
                        </button>
                    </div>
                    <p class="modal__subtitle">"Create a new notice for all students"</p>
                    <form class="form" on:submit=on_submit>
                        <div class="form__field">
                            <label for="notice-title">"Title"</label>
                            <input
                                id="notice-title"
                                node_ref=title_ref
                                autofocus=true
                                type="text"
                                placeholder="Notice title"
                                prop:value=move || dialog.with(|d| d.draft.title.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    dialog.update(|d| d.draft.title = value);
                                }
                            />
                        </div>
                        <div class="form__field">
                            <label for="notice-priority">"Priority"</label>
                            <PrioritySelect
                                id="notice-priority"
                                value=Signal::derive(move || dialog.with(|d| d.draft.priority))
                                on_change=Callback::new(move |p: Priority| dialog.update(|d| d.draft.priority = p))
                            />
                        </div>
                        <div class="form__field">
                            <label for="notice-content">"Content"</label>
                            <textarea
                                id="notice-content"
                                rows="4"
                                placeholder="Notice content"
                                prop:value=move || dialog.with(|d| d.draft.content.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    dialog.update(|d| d.draft.content = value);
                                }
                            ></textarea>
                        </div>
                        <button class="btn btn--primary btn--block" type="submit">"Publish Notice"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
