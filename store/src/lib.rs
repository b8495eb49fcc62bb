//! Platform-neutral core for the geolens IP lookup client.
//!
//! This crate owns everything both front ends share: the wire schema of the
//! backend API, the typed error taxonomy, configuration, the `session` and
//! `geo` state slices with their pure reducers, and the async operations that
//! drive them through the authenticated-request policy.
//!
//! ARCHITECTURE
//! ============
//! The HTTP stack is not chosen here. `api::GeoApi` is the boundary: the
//! browser client implements it with `gloo-net`, the CLI with `reqwest`, and
//! tests with a scripted fake. State lives behind `state::StateHandle`, so the
//! same operations can write into a Leptos signal or a plain `RefCell`.

pub mod api;
pub mod config;
pub mod error;
pub mod geo;
pub mod ops;
pub mod policy;
pub mod selection;
pub mod session;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_support;

pub use api::{AuthScheme, GeoApi};
pub use config::ApiConfig;
pub use error::ApiError;
pub use state::{AppAction, AppState, LocalStore, StateHandle};
