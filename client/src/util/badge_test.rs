use super::*;

#[test]
fn every_keyword_maps_to_its_tone() {
    let cases = [
        ("available", Tone::Success),
        ("occupied", Tone::Destructive),
        ("maintenance", Tone::Warning),
        ("pending", Tone::Warning),
        ("in-progress", Tone::Info),
        ("resolved", Tone::Success),
        ("high", Tone::Destructive),
        ("medium", Tone::Warning),
        ("low", Tone::Info),
    ];
    for (raw, tone) in cases {
        assert_eq!(tone_for(raw), tone, "keyword {raw:?}");
    }
}

#[test]
fn unknown_keyword_falls_back_to_muted() {
    assert_eq!(tone_for(""), Tone::Muted);
    assert_eq!(tone_for("closed"), Tone::Muted);
    assert_eq!(tone_for("Available"), Tone::Muted);
    assert_eq!(StatusKeyword::parse("in_progress"), None);
}

#[test]
fn typed_records_share_the_keyword_table() {
    assert_eq!(StatusKeyword::from(RoomStatus::Occupied).tone().badge_class(), "badge badge--destructive");
    assert_eq!(StatusKeyword::from(ComplaintStatus::InProgress).tone().badge_class(), "badge badge--info");
    assert_eq!(StatusKeyword::from(Priority::Medium).tone().badge_class(), "badge badge--warning");
    for status in RoomStatus::ALL {
        assert_eq!(StatusKeyword::from(status).tone(), tone_for(status.as_str()));
    }
    for status in ComplaintStatus::ALL {
        assert_eq!(StatusKeyword::from(status).tone(), tone_for(status.as_str()));
    }
    for priority in Priority::ALL {
        assert_eq!(StatusKeyword::from(priority).tone(), tone_for(priority.as_str()));
    }
}

#[test]
fn priority_color_only_knows_priorities() {
    assert_eq!(priority_color("high"), Tone::Destructive);
    assert_eq!(priority_color("medium"), Tone::Warning);
    assert_eq!(priority_color("low"), Tone::Info);
    assert_eq!(priority_color("pending"), Tone::Muted);
    assert_eq!(priority_color("low").text_class(), "text--info");
}

#[test]
fn status_icon_per_room_status() {
    assert_eq!(status_icon(RoomStatus::Available), "check-circle");
    assert_eq!(status_icon(RoomStatus::Occupied), "x-circle");
    assert_eq!(status_icon(RoomStatus::Maintenance), "clock");
}

#[test]
fn muted_badge_class() {
    assert_eq!(Tone::Muted.badge_class(), "badge badge--muted");
}

#[test]
fn primary_tone_is_not_a_keyword_tone() {
    assert_eq!(Tone::Primary.text_class(), "text--primary");
    assert!(StatusKeyword::parse("primary").is_none());
    assert_eq!(tone_for("primary"), Tone::Muted);
}
