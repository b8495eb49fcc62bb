//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements `store::GeoApi` over `fetch`; everything above it talks
//! to the trait, never to `gloo-net` directly.

pub mod api;
