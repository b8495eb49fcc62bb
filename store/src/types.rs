//! Wire DTOs for the geolocation backend.
//!
//! DESIGN
//! ======
//! One struct per endpoint payload. Responses are deserialized at the HTTP
//! boundary so a shape mismatch surfaces as `ApiError::Deserialization`
//! instead of a missing field deep inside the UI.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login form payload for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

/// Token payload returned by both `POST /login` and `GET /refresh`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Geolocation record for a single IP address.
///
/// Only `ip` is required; the lookup provider omits fields it does not know
/// (private ranges have no `org`, many addresses have no `postal`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub ip: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Coordinates encoded as `"lat,lon"`.
    #[serde(default)]
    pub loc: Option<String>,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub postal: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl GeoRecord {
    /// Parse `loc` into numeric coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::Missing`] when the record has no `loc` and
    /// the other variants when it is not a valid `"lat,lon"` pair.
    pub fn coordinates(&self) -> Result<Coordinates, CoordinateError> {
        let raw = self.loc.as_deref().ok_or(CoordinateError::Missing)?;
        Coordinates::parse(raw)
    }
}

/// Response body of `GET /geo/{ip}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoLookup {
    pub geo_info: GeoRecord,
}

/// A persisted record of a prior lookup, keyed by server-assigned id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub ip_address: String,
    pub geo_info: GeoRecord,
}

/// Response body of `GET /geo/history/{user_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Request body of `DELETE /geo/history`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteHistoryRequest {
    pub ids: Vec<i64>,
}

/// Response body of the public IP discovery service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicIp {
    pub ip: String,
}

/// Error returned by [`Coordinates::parse`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("record has no location")]
    Missing,
    #[error("location `{0}` is not a lat,lon pair")]
    Malformed(String),
    #[error("location `{0}` is outside valid latitude/longitude ranges")]
    OutOfRange(String),
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Parse a `"lat,lon"` string such as `"37.4056,-122.0775"`.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::Malformed`] when the string is not two
    /// comma-separated numbers and [`CoordinateError::OutOfRange`] when the
    /// numbers are not valid degrees.
    pub fn parse(raw: &str) -> Result<Self, CoordinateError> {
        let malformed = || CoordinateError::Malformed(raw.to_owned());
        let (lat, lon) = raw.split_once(',').ok_or_else(malformed)?;
        let latitude: f64 = lat.trim().parse().map_err(|_| malformed())?;
        let longitude: f64 = lon.trim().parse().map_err(|_| malformed())?;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::OutOfRange(raw.to_owned()));
        }
        Ok(Self { latitude, longitude })
    }
}
