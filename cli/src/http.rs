//! Native `reqwest` implementation of the backend HTTP boundary.
//!
//! The client keeps a cookie jar so the refresh cookie set by `/login` is
//! replayed on `/refresh` within one process (one-shot command or shell).
//! Response bodies are read as text, status-checked, then parsed.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use store::api::{AuthScheme, GeoApi, HISTORY_PATH, LOGIN_PATH, REFRESH_PATH, geo_path, history_path, parse_ip};
use store::types::{AccessToken, Credentials, DeleteHistoryRequest, GeoLookup, HistoryEntry, HistoryResponse, PublicIp};
use store::{ApiConfig, ApiError};

use crate::error::CliError;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

pub struct HttpApi {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Result<Self, CliError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| CliError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

fn network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Body of a 2xx response, or the backend's error for `endpoint`.
async fn read_ok(endpoint: &str, response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status().as_u16();
    let text = response.text().await.map_err(network_error)?;
    if !(200..300).contains(&status) {
        tracing::debug!(endpoint, status, "request rejected");
        return Err(ApiError::from_response(endpoint, status, &text));
    }
    Ok(text)
}

async fn read_json<T: DeserializeOwned>(endpoint: &str, response: reqwest::Response) -> Result<T, ApiError> {
    let text = read_ok(endpoint, response).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::deserialization(endpoint, e))
}

#[async_trait::async_trait(?Send)]
impl GeoApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.config.url(LOGIN_PATH))
            .json(credentials)
            .send()
            .await
            .map_err(network_error)?;
        let body: AccessToken = read_json(LOGIN_PATH, response).await?;
        Ok(body.access_token)
    }

    async fn refresh(&self) -> Result<String, ApiError> {
        let response = self.http.get(self.config.url(REFRESH_PATH)).send().await.map_err(network_error)?;
        let body: AccessToken = read_json(REFRESH_PATH, response).await?;
        Ok(body.access_token)
    }

    async fn geo_info(&self, token: &str, ip: &str) -> Result<GeoLookup, ApiError> {
        let path = geo_path(parse_ip(ip)?);
        let response = self
            .http
            .get(self.config.url(&path))
            .header(AUTHORIZATION, AuthScheme::Raw.header_value(token))
            .send()
            .await
            .map_err(network_error)?;
        read_json(&path, response).await
    }

    async fn history(&self, token: &str, user_id: u64) -> Result<Vec<HistoryEntry>, ApiError> {
        let path = history_path(user_id);
        let response = self
            .http
            .get(self.config.url(&path))
            .header(AUTHORIZATION, AuthScheme::Raw.header_value(token))
            .send()
            .await
            .map_err(network_error)?;
        let body: HistoryResponse = read_json(&path, response).await?;
        Ok(body.history)
    }

    async fn delete_history(&self, token: &str, ids: &[i64]) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.config.url(HISTORY_PATH))
            .header(AUTHORIZATION, AuthScheme::Bearer.header_value(token))
            .json(&DeleteHistoryRequest { ids: ids.to_vec() })
            .send()
            .await
            .map_err(network_error)?;
        read_ok(HISTORY_PATH, response).await.map(|_| ())
    }

    async fn public_ip(&self) -> Result<String, ApiError> {
        let url = &self.config.public_ip_url;
        let response = self.http.get(url).send().await.map_err(network_error)?;
        let body: PublicIp = read_json(url, response).await?;
        Ok(body.ip)
    }
}
