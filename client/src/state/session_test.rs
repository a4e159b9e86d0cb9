use super::*;

// =============================================================
// Initial state
// =============================================================

#[test]
fn session_state_default_is_logged_out() {
    let state = SessionState::default();
    assert!(state.session.is_none());
    assert_eq!(state.view(), PortalView::Login);
    assert_eq!(state.user_id(), "");
}

#[test]
fn role_default_is_student() {
    assert_eq!(Role::default(), Role::Student);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn login_as_student_selects_student_dashboard() {
    let mut state = SessionState::default();
    state.login(Role::Student, "STU001");
    assert_eq!(state.view(), PortalView::StudentDashboard);
    assert_eq!(state.user_id(), "STU001");
}

#[test]
fn login_as_admin_selects_admin_dashboard() {
    let mut state = SessionState::default();
    state.login(Role::Admin, "ADM001");
    assert_eq!(state.view(), PortalView::AdminDashboard);
    assert_eq!(state.session, Some(Session { role: Role::Admin, id: "ADM001".to_owned() }));
}

#[test]
fn login_replaces_existing_session() {
    let mut state = SessionState::default();
    state.login(Role::Student, "STU001");
    state.login(Role::Admin, "ADM002");
    assert_eq!(state.view(), PortalView::AdminDashboard);
    assert_eq!(state.user_id(), "ADM002");
}

#[test]
fn logout_returns_to_login_from_either_role() {
    for role in [Role::Student, Role::Admin] {
        let mut state = SessionState::default();
        state.login(role, "X1");
        state.logout();
        assert_eq!(state.view(), PortalView::Login, "role {role:?}");
        assert!(state.session.is_none());
    }
}

#[test]
fn logout_when_logged_out_is_noop() {
    let mut state = SessionState::default();
    state.logout();
    assert_eq!(state, SessionState::default());
}

#[test]
fn login_logout_cycle_repeats() {
    let mut state = SessionState::default();
    for _ in 0..3 {
        state.login(Role::Student, "STU001");
        assert!(state.session.is_some());
        state.logout();
        assert!(state.session.is_none());
    }
}

// =============================================================
// Role labels
// =============================================================

#[test]
fn role_labels_match_login_copy() {
    assert_eq!(Role::Student.as_str(), "student");
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Student.badge_label(), "STUDENT");
    assert_eq!(Role::Admin.badge_label(), "ADMIN");
}

#[test]
fn role_serializes_as_lowercase_keyword() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::from_str::<Role>("\"student\"").unwrap(), Role::Student);
}
