//! # hostel-client
//!
//! Leptos frontend for the hostel management portal: a login screen that
//! branches into a student or an admin dashboard, each backed by fixed
//! sample data.
//!
//! This crate contains the root app and session router, pages, components,
//! view state, and presentation helpers. The `ssr` feature is used by the
//! `hostel-portal` host for server rendering; `hydrate` builds the browser
//! bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the server-rendered markup to the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
