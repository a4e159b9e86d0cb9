//! Login form input and its submit guard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::session::Role;

/// Why a login submit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("user id is required")]
    MissingId,
    #[error("password is required")]
    MissingPassword,
}

/// Role selector plus the two text fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub role: Role,
    pub id: String,
    pub password: String,
}

impl LoginForm {
    /// Check the required fields and return the `(role, id)` pair to hand to
    /// the session holder. Values are passed through untrimmed.
    ///
    /// # Errors
    ///
    /// Returns which required field is empty. The id is checked first.
    pub fn submit(&self) -> Result<(Role, String), LoginError> {
        if self.id.is_empty() {
            return Err(LoginError::MissingId);
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        Ok((self.role, self.id.clone()))
    }

    /// Label for the id input.
    pub fn id_label(&self) -> &'static str {
        match self.role {
            Role::Student => "Student ID",
            Role::Admin => "Admin ID",
        }
    }

    /// Placeholder for the id input.
    pub fn id_placeholder(&self) -> &'static str {
        match self.role {
            Role::Student => "STU001",
            Role::Admin => "ADM001",
        }
    }

    pub fn description(&self) -> String {
        format!("Enter your {} credentials to continue", self.role.as_str())
    }
}

/// Sample credentials shown under the login card. Never verified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoCredential {
    pub role: Role,
    pub id: &'static str,
    pub password: &'static str,
}

pub const DEMO_CREDENTIALS: &[DemoCredential] = &[
    DemoCredential { role: Role::Student, id: "STU001", password: "password" },
    DemoCredential { role: Role::Admin, id: "ADM001", password: "admin123" },
];
