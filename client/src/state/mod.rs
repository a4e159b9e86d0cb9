//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `login`, drafts, `toast`) so pages
//! and components depend on small focused models. All of it is in-memory
//! and gone on refresh.

pub mod complaint;
pub mod login;
pub mod notice;
pub mod records;
pub mod session;
pub mod toast;
pub mod ui;
