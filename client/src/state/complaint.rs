//! Student complaint draft.
//!
//! A submit that passes the guard only confirms and resets. The complaint is
//! not appended to "My Complaints".

#[cfg(test)]
#[path = "complaint_test.rs"]
mod complaint_test;

use super::records::{ComplaintStatus, Priority};
use super::toast::Notification;

/// A required draft field was empty on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{field} is required")]
pub struct DraftError {
    pub field: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComplaintDraft {
    /// Complaint category value from the selector; empty until chosen.
    pub kind: String,
    pub description: String,
    pub priority: Priority,
}

impl ComplaintDraft {
    /// Accept the draft if `kind` and `description` are set, resetting it to
    /// the empty default and returning the confirmation to show.
    ///
    /// # Errors
    ///
    /// Returns the first empty required field; the draft is left untouched.
    pub fn submit(&mut self) -> Result<Notification, DraftError> {
        if self.kind.is_empty() {
            return Err(DraftError { field: "type" });
        }
        if self.description.is_empty() {
            return Err(DraftError { field: "description" });
        }
        log::info!("complaint submitted kind={} priority={}", self.kind, self.priority.as_str());
        *self = Self::default();
        Ok(Notification::new("Complaint Submitted", "Your complaint has been submitted successfully."))
    }
}

/// Confirmation for the admin "Update Status" selector. The complaint list is
/// not changed.
pub fn complaint_update_notification(complaint_id: u32, status: ComplaintStatus) -> Notification {
    log::info!("complaint status change requested id={complaint_id} status={}", status.as_str());
    Notification::new("Complaint Updated", format!("Complaint status updated to {}.", status.as_str()))
}
