//! Page modules for the three top-level views.
//!
//! ARCHITECTURE
//! ============
//! The root component picks exactly one page from the session state. Each
//! page owns its local drafts and tab selection and delegates rendering
//! details to `components`.

pub mod admin_dashboard;
pub mod login;
pub mod student_dashboard;
