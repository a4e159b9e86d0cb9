use super::*;

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.current.is_none());
    assert_eq!(state.seq, 0);
}

#[test]
fn show_replaces_current_notification() {
    let mut state = ToastState::default();
    state.show(Notification::new("First", "one"));
    state.show(Notification::new("Second", "two"));
    assert_eq!(state.current, Some(Notification::new("Second", "two")));
    assert_eq!(state.seq, 2);
}

#[test]
fn dismiss_clears_notification() {
    let mut state = ToastState::default();
    state.show(Notification::new("Saved", "ok"));
    state.dismiss();
    assert!(state.current.is_none());
}

#[test]
fn stale_timer_does_not_dismiss_newer_notification() {
    let mut state = ToastState::default();
    state.show(Notification::new("First", "one"));
    let first_seq = state.seq;
    state.show(Notification::new("Second", "two"));

    state.dismiss_if_current(first_seq);
    assert_eq!(state.current.as_ref().map(|n| n.title.as_str()), Some("Second"));

    state.dismiss_if_current(state.seq);
    assert!(state.current.is_none());
}
