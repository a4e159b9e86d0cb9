//! Local dashboard chrome state (active tab).
//!
//! DESIGN
//! ======
//! Each dashboard keeps its own tab signal; switching tabs never touches
//! drafts or the session.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs shared by the student and admin dashboards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Rooms,
    Complaints,
    Notices,
}

impl DashboardTab {
    pub const ALL: [Self; 3] = [Self::Rooms, Self::Complaints, Self::Notices];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rooms => "Rooms",
            Self::Complaints => "Complaints",
            Self::Notices => "Notices",
        }
    }

    /// Icon token rendered in the tab trigger.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Rooms => "bed",
            Self::Complaints => "message-square",
            Self::Notices => "bell",
        }
    }
}
