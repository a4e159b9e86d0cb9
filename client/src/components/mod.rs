//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome, record cards, and the two draft forms,
//! reading the shared toast signal from Leptos context.

pub mod complaint_form;
pub mod dashboard_header;
pub mod notice_list;
pub mod notice_dialog;
pub mod room_card;
pub mod stats_grid;
pub mod status_badge;
pub mod tab_bar;
pub mod toast;
