//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers live here so page and component logic stays testable without
//! a browser.

pub mod auth;
pub mod format;
pub mod map;
