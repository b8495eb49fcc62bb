//! # client
//!
//! Leptos + WASM single-page front end for the geolens IP lookup service.
//!
//! This crate contains pages, components, the signal-backed application
//! store, and the `gloo-net` implementation of the backend HTTP boundary.
//! All request/state semantics live in the `store` crate; this crate only
//! renders them and wires browser events to the shared operations.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
