//! Admin notice draft and its dialog flag.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use super::complaint::DraftError;
use super::records::Priority;
use super::toast::Notification;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeDraft {
    pub title: String,
    pub content: String,
    pub priority: Priority,
}

/// Post Notice dialog: the draft plus whether the dialog is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeDialog {
    pub draft: NoticeDraft,
    pub open: bool,
}

impl NoticeDialog {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the dialog without touching the draft.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Publish if `title` and `content` are set: reset the draft, close the
    /// dialog, and return the confirmation to show. The notice list is not
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns the first empty required field; draft and dialog flag are left
    /// as they were.
    pub fn submit(&mut self) -> Result<Notification, DraftError> {
        if self.draft.title.is_empty() {
            return Err(DraftError { field: "title" });
        }
        if self.draft.content.is_empty() {
            return Err(DraftError { field: "content" });
        }
        log::info!("notice published title={} priority={}", self.draft.title, self.draft.priority.as_str());
        self.draft = NoticeDraft::default();
        self.open = false;
        Ok(Notification::new("Notice Published", "The notice has been published successfully."))
    }
}
