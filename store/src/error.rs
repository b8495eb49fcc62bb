//! Error taxonomy for calls across the HTTP boundary.
//!
//! ERROR HANDLING
//! ==============
//! Every async operation resolves to `Result<_, ApiError>`. The `Display`
//! text of a variant is exactly what the owning slice stores in its `error`
//! field, so backend messages pass through verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by `GeoApi` implementations and the operations built on them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Login or token refresh was rejected by the backend.
    #[error("{0}")]
    Auth(String),

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// A protected call came back with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Lookup input is not an IP address; nothing was sent.
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    /// The response body did not match the endpoint's schema.
    #[error("invalid response from {endpoint}: {message}")]
    Deserialization { endpoint: String, message: String },

    /// The result arrived after a logout and was discarded.
    #[error("request superseded by logout")]
    Superseded,
}

impl ApiError {
    /// Build an error for a non-success response from `endpoint`.
    ///
    /// Auth endpoints (`/login`, `/refresh`) map to [`ApiError::Auth`]; all
    /// others to [`ApiError::Http`].
    #[must_use]
    pub fn from_response(endpoint: &str, status: u16, body: &str) -> Self {
        let message = message_from_body(status, body);
        if is_auth_endpoint(endpoint) { Self::Auth(message) } else { Self::Http { status, message } }
    }

    /// Build a schema-validation error.
    #[must_use]
    pub fn deserialization(endpoint: &str, err: impl std::fmt::Display) -> Self {
        Self::Deserialization { endpoint: endpoint.to_owned(), message: err.to_string() }
    }

    /// HTTP status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn is_auth_endpoint(endpoint: &str) -> bool {
    let path = endpoint.split('?').next().unwrap_or(endpoint);
    path.ends_with("/login") || path.ends_with("/refresh")
}

/// Extract a human-readable message from an error response body.
///
/// Prefers a JSON `message` (or `error`) string, then the raw text, then a
/// generic status line.
#[must_use]
pub fn message_from_body(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error).filter(|m| !m.trim().is_empty()) {
            return message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('{') {
        return format!("request failed with status {status}");
    }
    trimmed.to_owned()
}
