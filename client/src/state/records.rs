//! Display-only hostel records and the fixed sample data behind both
//! dashboards.
//!
//! DESIGN
//! ======
//! Nothing in the portal mutates these lists. Submitting a complaint, posting
//! a notice, or changing a status only raises a notification; the sample data
//! renders the same on every visit.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use serde::{Deserialize, Serialize};

use crate::util::badge::Tone;

// =============================================================================
// KEYWORD ENUMS
// =============================================================================

/// Complaint and notice priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_keyword(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [Self; 3] = [Self::Available, Self::Occupied, Self::Maintenance];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Maintenance",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Resolved];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    pub fn from_keyword(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Complaint categories offered by the student complaint form, as
/// `(value, label)` pairs.
pub const COMPLAINT_KINDS: &[(&str, &str)] = &[
    ("maintenance", "Maintenance"),
    ("cleaning", "Cleaning"),
    ("electrical", "Electrical"),
    ("plumbing", "Plumbing"),
    ("other", "Other"),
];

// =============================================================================
// RECORDS
// =============================================================================

/// Room as a student sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRoom {
    pub id: &'static str,
    pub kind: &'static str,
    pub status: RoomStatus,
    pub floor: u8,
    pub amenities: &'static [&'static str],
}

/// Room as an admin sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminRoom {
    pub id: &'static str,
    pub kind: &'static str,
    pub status: RoomStatus,
    pub floor: u8,
    pub occupants: Option<&'static str>,
}

/// Room card subtitle, e.g. `"Single • Floor 1"`.
pub fn room_subtitle(kind: &str, floor: u8) -> String {
    format!("{kind} • Floor {floor}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentComplaint {
    pub id: u32,
    pub kind: &'static str,
    pub description: &'static str,
    pub status: ComplaintStatus,
    pub date: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminComplaint {
    pub id: u32,
    pub student: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub status: ComplaintStatus,
    pub date: &'static str,
    pub priority: Priority,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
    pub date: &'static str,
    pub priority: Priority,
}

/// Admin overview card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

// =============================================================================
// SAMPLE DATA
// =============================================================================

pub fn student_rooms() -> Vec<StudentRoom> {
    vec![
        StudentRoom { id: "R101", kind: "Single", status: RoomStatus::Available, floor: 1, amenities: &["Bed", "Desk", "WiFi"] },
        StudentRoom {
            id: "R102",
            kind: "Double",
            status: RoomStatus::Occupied,
            floor: 1,
            amenities: &["Bed", "Desk", "WiFi", "AC"],
        },
        StudentRoom { id: "R201", kind: "Single", status: RoomStatus::Available, floor: 2, amenities: &["Bed", "Desk", "WiFi"] },
        StudentRoom {
            id: "R202",
            kind: "Triple",
            status: RoomStatus::Maintenance,
            floor: 2,
            amenities: &["Bed", "Desk", "WiFi"],
        },
    ]
}

pub fn admin_rooms() -> Vec<AdminRoom> {
    vec![
        AdminRoom { id: "R101", kind: "Single", status: RoomStatus::Available, floor: 1, occupants: None },
        AdminRoom { id: "R102", kind: "Double", status: RoomStatus::Occupied, floor: 1, occupants: Some("STU001, STU002") },
        AdminRoom { id: "R201", kind: "Single", status: RoomStatus::Available, floor: 2, occupants: None },
        AdminRoom { id: "R202", kind: "Triple", status: RoomStatus::Maintenance, floor: 2, occupants: None },
        AdminRoom { id: "R301", kind: "Double", status: RoomStatus::Occupied, floor: 3, occupants: Some("STU003, STU004") },
    ]
}

pub fn student_complaints() -> Vec<StudentComplaint> {
    vec![
        StudentComplaint {
            id: 1,
            kind: "Maintenance",
            description: "AC not working",
            status: ComplaintStatus::Pending,
            date: "2024-01-15",
        },
        StudentComplaint {
            id: 2,
            kind: "Cleaning",
            description: "Bathroom needs cleaning",
            status: ComplaintStatus::Resolved,
            date: "2024-01-14",
        },
    ]
}

pub fn admin_complaints() -> Vec<AdminComplaint> {
    vec![
        AdminComplaint {
            id: 1,
            student: "STU001",
            kind: "Maintenance",
            description: "AC not working in room R102",
            status: ComplaintStatus::Pending,
            date: "2024-01-15",
            priority: Priority::High,
        },
        AdminComplaint {
            id: 2,
            student: "STU003",
            kind: "Cleaning",
            description: "Bathroom needs deep cleaning",
            status: ComplaintStatus::InProgress,
            date: "2024-01-14",
            priority: Priority::Medium,
        },
        AdminComplaint {
            id: 3,
            student: "STU005",
            kind: "Electrical",
            description: "Power outlet not working",
            status: ComplaintStatus::Resolved,
            date: "2024-01-13",
            priority: Priority::High,
        },
    ]
}

pub fn notices() -> Vec<Notice> {
    vec![
        Notice {
            id: 1,
            title: "Hostel Fees Due",
            content: "Please pay your hostel fees before January 31st",
            date: "2024-01-10",
            priority: Priority::High,
        },
        Notice {
            id: 2,
            title: "WiFi Maintenance",
            content: "WiFi will be down for maintenance on January 20th",
            date: "2024-01-12",
            priority: Priority::Medium,
        },
    ]
}

pub const ADMIN_STATS: &[Stat] = &[
    Stat { title: "Total Rooms", value: "124", change: "+2", icon: "home", tone: Tone::Primary },
    Stat { title: "Occupied", value: "98", change: "+5", icon: "users", tone: Tone::Success },
    Stat { title: "Available", value: "20", change: "-3", icon: "check-circle", tone: Tone::Info },
    Stat { title: "Under Maintenance", value: "6", change: "+1", icon: "clock", tone: Tone::Warning },
];
