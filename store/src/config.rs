//! Backend endpoint configuration.
//!
//! Native front ends read environment variables at runtime; the WASM bundle
//! reads the same keys at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3500";
pub const DEFAULT_PUBLIC_IP_URL: &str = "https://api.ipify.org?format=json";
pub const DEFAULT_HISTORY_USER_ID: u64 = 1;

pub const ENV_API_BASE_URL: &str = "GEOLENS_API_BASE_URL";
pub const ENV_PUBLIC_IP_URL: &str = "GEOLENS_PUBLIC_IP_URL";
pub const ENV_HISTORY_USER_ID: &str = "GEOLENS_HISTORY_USER_ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the geolocation backend, without trailing `/`.
    pub base_url: String,
    /// Full URL of the public IP discovery service.
    pub public_ip_url: String,
    /// User whose search history the home screen shows.
    pub history_user_id: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            public_ip_url: DEFAULT_PUBLIC_IP_URL.to_owned(),
            history_user_id: DEFAULT_HISTORY_USER_ID,
        }
    }
}

impl ApiConfig {
    /// Build config from an arbitrary key lookup.
    ///
    /// Missing, blank, or unparsable values fall back to defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let base_url = non_blank(ENV_API_BASE_URL)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let public_ip_url = non_blank(ENV_PUBLIC_IP_URL).unwrap_or_else(|| DEFAULT_PUBLIC_IP_URL.to_owned());
        let history_user_id = non_blank(ENV_HISTORY_USER_ID)
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_HISTORY_USER_ID);

        Self { base_url, public_ip_url, history_user_id }
    }

    /// Build config from process environment variables.
    ///
    /// - `GEOLENS_API_BASE_URL`: default `http://localhost:3500`
    /// - `GEOLENS_PUBLIC_IP_URL`: default ipify JSON endpoint
    /// - `GEOLENS_HISTORY_USER_ID`: default 1
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from variables captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                ENV_API_BASE_URL => option_env!("GEOLENS_API_BASE_URL"),
                ENV_PUBLIC_IP_URL => option_env!("GEOLENS_PUBLIC_IP_URL"),
                ENV_HISTORY_USER_ID => option_env!("GEOLENS_HISTORY_USER_ID"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Absolute URL for an API `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        crate::api::endpoint_url(&self.base_url, path)
    }
}
