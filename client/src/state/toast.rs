//! Transient confirmation notification.
//!
//! One slot, shared through context. Showing a new notification replaces the
//! current one; nothing is queued.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Seconds a notification stays up in the browser before auto-dismiss.
pub const TOAST_DISMISS_SECS: u64 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<Notification>,
    /// Bumped on every `show` so a stale auto-dismiss timer can tell it has
    /// been superseded.
    pub seq: u64,
}

impl ToastState {
    pub fn show(&mut self, notification: Notification) {
        log::debug!("toast: {}", notification.title);
        self.current = Some(notification);
        self.seq = self.seq.wrapping_add(1);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Dismiss only if no newer notification arrived since `seq`.
    pub fn dismiss_if_current(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }
}
