//! REST client for the geolocation backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ApiError::Network` since there is no
//! browser `fetch` to call.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are converted with `ApiError::from_response` so the
//! backend's message reaches the slice verbatim. Bodies are read as text first
//! and parsed afterwards; a schema mismatch is `ApiError::Deserialization`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use store::api::GeoApi;
use store::types::{Credentials, GeoLookup, HistoryEntry};
use store::{ApiConfig, ApiError};

#[cfg(any(test, feature = "csr"))]
fn network_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

/// `fetch`-backed implementation of [`GeoApi`].
///
/// Every request to the API origin sends credentials so the refresh cookie
/// set by `/login` is stored and replayed on `/refresh`.
#[derive(Clone, Debug)]
pub struct BrowserApi {
    config: ApiConfig,
}

impl BrowserApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "csr")]
mod fetch {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;
    use store::ApiError;
    use web_sys::RequestCredentials;

    use super::network_error;

    pub fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        builder.credentials(RequestCredentials::Include)
    }

    /// Read `resp` as text and decode it as `T`, mapping failures per endpoint.
    pub async fn read_json<T: DeserializeOwned>(endpoint: &str, resp: Response) -> Result<T, ApiError> {
        let body = read_ok(endpoint, resp).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::deserialization(endpoint, e))
    }

    /// Body of a 2xx response, or the backend's error.
    pub async fn read_ok(endpoint: &str, resp: Response) -> Result<String, ApiError> {
        let status = resp.status();
        let ok = resp.ok();
        let body = resp.text().await.map_err(network_error)?;
        if !ok {
            return Err(ApiError::from_response(endpoint, status, &body));
        }
        Ok(body)
    }
}

#[async_trait::async_trait(?Send)]
impl GeoApi for BrowserApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use store::api::LOGIN_PATH;
            use store::types::AccessToken;

            let resp = fetch::with_credentials(gloo_net::http::Request::post(&self.config.url(LOGIN_PATH)))
                .json(credentials)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            let body: AccessToken = fetch::read_json(LOGIN_PATH, resp).await?;
            Ok(body.access_token)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(unavailable())
        }
    }

    async fn refresh(&self) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use store::api::REFRESH_PATH;
            use store::types::AccessToken;

            let resp = fetch::with_credentials(gloo_net::http::Request::get(&self.config.url(REFRESH_PATH)))
                .send()
                .await
                .map_err(network_error)?;
            let body: AccessToken = fetch::read_json(REFRESH_PATH, resp).await?;
            Ok(body.access_token)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    async fn geo_info(&self, token: &str, ip: &str) -> Result<GeoLookup, ApiError> {
        #[cfg(feature = "csr")]
        {
            use store::api::{AuthScheme, geo_path, parse_ip};

            let path = geo_path(parse_ip(ip)?);
            let resp = fetch::with_credentials(gloo_net::http::Request::get(&self.config.url(&path)))
                .header("Authorization", &AuthScheme::Raw.header_value(token))
                .send()
                .await
                .map_err(network_error)?;
            fetch::read_json(&path, resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, ip);
            Err(unavailable())
        }
    }

    async fn history(&self, token: &str, user_id: u64) -> Result<Vec<HistoryEntry>, ApiError> {
        #[cfg(feature = "csr")]
        {
            use store::api::{AuthScheme, history_path};
            use store::types::HistoryResponse;

            let path = history_path(user_id);
            let resp = fetch::with_credentials(gloo_net::http::Request::get(&self.config.url(&path)))
                .header("Authorization", &AuthScheme::Raw.header_value(token))
                .send()
                .await
                .map_err(network_error)?;
            let body: HistoryResponse = fetch::read_json(&path, resp).await?;
            Ok(body.history)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, user_id);
            Err(unavailable())
        }
    }

    async fn delete_history(&self, token: &str, ids: &[i64]) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            use store::api::{AuthScheme, HISTORY_PATH};
            use store::types::DeleteHistoryRequest;

            let payload = DeleteHistoryRequest { ids: ids.to_vec() };
            let resp = fetch::with_credentials(gloo_net::http::Request::delete(&self.config.url(HISTORY_PATH)))
                .header("Authorization", &AuthScheme::Bearer.header_value(token))
                .json(&payload)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            fetch::read_ok(HISTORY_PATH, resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, ids);
            Err(unavailable())
        }
    }

    async fn public_ip(&self) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use store::types::PublicIp;

            let url = &self.config.public_ip_url;
            let resp = gloo_net::http::Request::get(url).send().await.map_err(network_error)?;
            let body: PublicIp = fetch::read_json(url, resp).await?;
            Ok(body.ip)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }
}
