//! Status and priority keywords to presentation tokens.
//!
//! Both dashboards render badges through this one table. Tokens are the
//! theme tone names used by the stylesheet (`badge--success`,
//! `text--warning`, ...).

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use crate::state::records::{ComplaintStatus, Priority, RoomStatus};

/// Every keyword that carries its own badge style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKeyword {
    Available,
    Occupied,
    Maintenance,
    Pending,
    InProgress,
    Resolved,
    High,
    Medium,
    Low,
}

/// Theme tone a keyword renders in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Brand accent; used by overview cards, never by a keyword.
    Primary,
    Success,
    Destructive,
    Warning,
    Info,
    /// Neutral fallback for unrecognized keywords.
    Muted,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Destructive => "destructive",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Muted => "muted",
        }
    }

    /// Badge class, e.g. `"badge badge--warning"`.
    pub fn badge_class(self) -> String {
        format!("badge badge--{}", self.as_str())
    }

    /// Text color class, e.g. `"text--info"`.
    pub fn text_class(self) -> String {
        format!("text--{}", self.as_str())
    }
}

impl StatusKeyword {
    pub fn parse(raw: &str) -> Option<Self> {
        Some(match raw {
            "available" => Self::Available,
            "occupied" => Self::Occupied,
            "maintenance" => Self::Maintenance,
            "pending" => Self::Pending,
            "in-progress" => Self::InProgress,
            "resolved" => Self::Resolved,
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => return None,
        })
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Available | Self::Resolved => Tone::Success,
            Self::Occupied | Self::High => Tone::Destructive,
            Self::Maintenance | Self::Pending | Self::Medium => Tone::Warning,
            Self::InProgress | Self::Low => Tone::Info,
        }
    }
}

impl From<RoomStatus> for StatusKeyword {
    fn from(status: RoomStatus) -> Self {
        match status {
            RoomStatus::Available => Self::Available,
            RoomStatus::Occupied => Self::Occupied,
            RoomStatus::Maintenance => Self::Maintenance,
        }
    }
}

impl From<ComplaintStatus> for StatusKeyword {
    fn from(status: ComplaintStatus) -> Self {
        match status {
            ComplaintStatus::Pending => Self::Pending,
            ComplaintStatus::InProgress => Self::InProgress,
            ComplaintStatus::Resolved => Self::Resolved,
        }
    }
}

impl From<Priority> for StatusKeyword {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => Self::High,
            Priority::Medium => Self::Medium,
            Priority::Low => Self::Low,
        }
    }
}

/// Tone for free-text keywords; anything unrecognized is muted.
pub fn tone_for(raw: &str) -> Tone {
    StatusKeyword::parse(raw).map_or(Tone::Muted, StatusKeyword::tone)
}

/// Text color for a priority keyword. Status keywords are not priorities and
/// fall back to muted.
pub fn priority_color(raw: &str) -> Tone {
    match Priority::from_keyword(raw) {
        Some(p) => StatusKeyword::from(p).tone(),
        None => Tone::Muted,
    }
}

/// Icon token shown beside a room status badge.
pub fn status_icon(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => "check-circle",
        RoomStatus::Occupied => "x-circle",
        RoomStatus::Maintenance => "clock",
    }
}
