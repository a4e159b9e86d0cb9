use super::*;

// =============================================================
// Keywords
// =============================================================

#[test]
fn priority_default_is_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn priority_from_keyword_accepts_select_values_only() {
    assert_eq!(Priority::from_keyword("low"), Some(Priority::Low));
    assert_eq!(Priority::from_keyword("high"), Some(Priority::High));
    assert_eq!(Priority::from_keyword("High"), None);
    assert_eq!(Priority::from_keyword("urgent"), None);
}

#[test]
fn complaint_status_keyword_uses_hyphen() {
    assert_eq!(ComplaintStatus::InProgress.as_str(), "in-progress");
    assert_eq!(ComplaintStatus::from_keyword("in-progress"), Some(ComplaintStatus::InProgress));
    assert_eq!(ComplaintStatus::from_keyword("in_progress"), None);
    assert_eq!(serde_json::to_string(&ComplaintStatus::InProgress).unwrap(), "\"in-progress\"");
}

#[test]
fn room_status_labels_are_title_case() {
    let labels: Vec<_> = RoomStatus::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["Available", "Occupied", "Maintenance"]);
}

// =============================================================
// Sample data
// =============================================================

#[test]
fn student_rooms_match_sample_inventory() {
    let rooms = student_rooms();
    let ids: Vec<_> = rooms.iter().map(|r| r.id).collect();
    assert_eq!(ids, ["R101", "R102", "R201", "R202"]);
    assert_eq!(rooms[1].amenities, &["Bed", "Desk", "WiFi", "AC"]);
    assert_eq!(rooms.iter().filter(|r| r.status == RoomStatus::Available).count(), 2);
}

#[test]
fn admin_rooms_list_occupants_only_for_occupied_rooms() {
    for room in admin_rooms() {
        assert_eq!(room.occupants.is_some(), room.status == RoomStatus::Occupied, "room {}", room.id);
    }
}

#[test]
fn admin_complaints_cover_every_status() {
    let complaints = admin_complaints();
    for status in ComplaintStatus::ALL {
        assert!(complaints.iter().any(|c| c.status == status), "missing {status:?}");
    }
}

#[test]
fn sample_lists_are_stable_between_calls() {
    assert_eq!(notices(), notices());
    assert_eq!(student_complaints(), student_complaints());
}

#[test]
fn admin_stats_in_display_order() {
    let titles: Vec<_> = ADMIN_STATS.iter().map(|s| s.title).collect();
    assert_eq!(titles, ["Total Rooms", "Occupied", "Available", "Under Maintenance"]);
    assert_eq!(ADMIN_STATS[2].change, "-3");
    let tones: Vec<_> = ADMIN_STATS.iter().map(|s| s.tone.text_class()).collect();
    assert_eq!(tones, ["text--primary", "text--success", "text--info", "text--warning"]);
}

#[test]
fn room_subtitle_joins_kind_and_floor() {
    assert_eq!(room_subtitle("Triple", 2), "Triple • Floor 2");
}

#[test]
fn complaint_kinds_offer_five_categories() {
    let values: Vec<_> = COMPLAINT_KINDS.iter().map(|(v, _)| *v).collect();
    assert_eq!(values, ["maintenance", "cleaning", "electrical", "plumbing", "other"]);
}
