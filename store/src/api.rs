//! HTTP boundary of the backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `GeoApi` is implemented once per platform (browser: `gloo-net`, native:
//! `reqwest`). Path and header construction lives here so both transports
//! agree on the contract byte for byte.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::net::IpAddr;

use crate::error::ApiError;
use crate::types::{Credentials, GeoLookup, HistoryEntry};

pub const LOGIN_PATH: &str = "/login";
pub const REFRESH_PATH: &str = "/refresh";
pub const HISTORY_PATH: &str = "/geo/history";

/// How a protected endpoint expects the bearer token in `Authorization`.
///
/// The lookup and history endpoints take the bare token while history
/// deletion takes the `Bearer` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthScheme {
    Raw,
    Bearer,
}

impl AuthScheme {
    /// Header value for `token` under this scheme.
    #[must_use]
    pub fn header_value(self, token: &str) -> String {
        match self {
            Self::Raw => token.to_owned(),
            Self::Bearer => format!("Bearer {token}"),
        }
    }
}

/// Parse user-supplied lookup input as an IP address.
///
/// Only a bare address may reach the path, so input such as
/// `1.1.1.1/../login` never carries the token to another endpoint.
///
/// # Errors
///
/// [`ApiError::InvalidIp`] when `raw` is not an IPv4 or IPv6 address.
pub fn parse_ip(raw: &str) -> Result<IpAddr, ApiError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| ApiError::InvalidIp(trimmed.to_owned()))
}

/// Path of the geo lookup endpoint for `ip`.
#[must_use]
pub fn geo_path(ip: IpAddr) -> String {
    format!("/geo/{ip}")
}

/// Path of the history endpoint for `user_id`.
#[must_use]
pub fn history_path(user_id: u64) -> String {
    format!("{HISTORY_PATH}/{user_id}")
}

/// Join a configured base URL and an endpoint path.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Remote operations the core needs from the backend.
///
/// Futures are `?Send` so the browser implementation (single-threaded WASM)
/// and native implementations share one trait.
#[async_trait::async_trait(?Send)]
pub trait GeoApi {
    /// `POST /login`: exchange credentials for an access token.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] when the backend rejects the credentials.
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError>;

    /// `GET /refresh`: obtain a fresh access token from the refresh cookie.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] when no valid refresh credential exists.
    async fn refresh(&self) -> Result<String, ApiError>;

    /// `GET /geo/{ip}` with a raw `Authorization` header.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] on rejection, [`ApiError::Deserialization`] on a bad payload.
    async fn geo_info(&self, token: &str, ip: &str) -> Result<GeoLookup, ApiError>;

    /// `GET /geo/history/{user_id}` with a raw `Authorization` header.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] on rejection, [`ApiError::Deserialization`] on a bad payload.
    async fn history(&self, token: &str, user_id: u64) -> Result<Vec<HistoryEntry>, ApiError>;

    /// `DELETE /geo/history` with `{ids}` and a `Bearer` header.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] on rejection.
    async fn delete_history(&self, token: &str, ids: &[i64]) -> Result<(), ApiError>;

    /// Ask the public IP service for the caller's address.
    ///
    /// # Errors
    ///
    /// Any transport or schema error; callers treat this as best effort.
    async fn public_ip(&self) -> Result<String, ApiError>;
}
