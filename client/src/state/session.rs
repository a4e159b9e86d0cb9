//! Session holder for the signed-in portal user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component owns one `RwSignal<SessionState>` and renders the login
//! page or a role dashboard from it. Dashboards never own the session; they
//! receive the user id and a logout callback.
//!
//! There is no credential check anywhere in this state machine. `login`
//! always succeeds once the login form has accepted its input.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Portal role chosen on the login screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    /// Lowercase keyword, as used in prose ("Enter your student credentials").
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }

    /// Uppercase badge label shown on the login card.
    pub fn badge_label(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Admin => "ADMIN",
        }
    }
}

/// The currently signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub id: String,
}

/// Which top-level view the root component should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortalView {
    Login,
    StudentDashboard,
    AdminDashboard,
}

/// At most one session; `None` means logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    /// Start a session for `id`, replacing any existing one.
    pub fn login(&mut self, role: Role, id: impl Into<String>) {
        let id = id.into();
        log::info!("session started role={} id={id}", role.as_str());
        self.session = Some(Session { role, id });
    }

    /// Drop the current session, if any.
    pub fn logout(&mut self) {
        if let Some(prev) = self.session.take() {
            log::info!("session ended role={} id={}", prev.role.as_str(), prev.id);
        }
    }

    /// Id of the signed-in user, empty when logged out.
    pub fn user_id(&self) -> String {
        self.session.as_ref().map(|s| s.id.clone()).unwrap_or_default()
    }

    pub fn view(&self) -> PortalView {
        match self.session.as_ref().map(|s| s.role) {
            None => PortalView::Login,
            Some(Role::Student) => PortalView::StudentDashboard,
            Some(Role::Admin) => PortalView::AdminDashboard,
        }
    }
}
