//! Bottom-corner confirmation toast.
//!
//! Reads the shared `RwSignal<ToastState>` from context. In the browser the
//! toast dismisses itself after `TOAST_DISMISS_SECS`; server rendering never
//! schedules the timer.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let state = toast.get();
        if state.current.is_none() {
            return;
        }
        let seq = state.seq;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(crate::state::toast::TOAST_DISMISS_SECS)).await;
            toast.update(|t| t.dismiss_if_current(seq));
        });
    });

    view! {
        {move || {
            toast
                .get()
                .current
                .map(|note| {
                    view! {
                        <div class="toast" role="status" aria-live="polite">
                            <div class="toast__body">
                                <p class="toast__title">{note.title}</p>
                                <p class="toast__description">{note.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toast.update(ToastState::dismiss)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
