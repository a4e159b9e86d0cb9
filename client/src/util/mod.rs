//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure presentation helpers live here so pages and components render the
//! same keyword the same way.

pub mod badge;
