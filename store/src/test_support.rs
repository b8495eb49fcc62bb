//! Scripted `GeoApi` fake shared by the async operation tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::api::GeoApi;
use crate::error::ApiError;
use crate::types::{Credentials, GeoLookup, GeoRecord, HistoryEntry};

/// One recorded call against [`FakeApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Login(String),
    Refresh,
    GeoInfo { token: String, ip: String },
    History { token: String, user_id: u64 },
    Delete { token: String, ids: Vec<i64> },
    PublicIp,
}

type Hook = Box<dyn Fn()>;

/// In-memory backend. History lives "server side" so deletes are visible
/// to the next fetch.
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub accepted: (String, String),
    pub login_token: String,
    pub refresh_results: RefCell<VecDeque<Result<String, ApiError>>>,
    pub lookups: HashMap<String, GeoLookup>,
    pub history: RefCell<Vec<HistoryEntry>>,
    pub history_error: Option<ApiError>,
    pub delete_error: Option<ApiError>,
    pub public_ip: Result<String, ApiError>,
    pub on_geo_info: RefCell<Option<Hook>>,
    pub on_refresh: RefCell<Option<Hook>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            accepted: ("a@b.com".to_owned(), "x".to_owned()),
            login_token: "T1".to_owned(),
            refresh_results: RefCell::new(VecDeque::new()),
            lookups: HashMap::from([("8.8.8.8".to_owned(), mountain_view())]),
            history: RefCell::new(Vec::new()),
            history_error: None,
            delete_error: None,
            public_ip: Ok("8.8.8.8".to_owned()),
            on_geo_info: RefCell::new(None),
            on_refresh: RefCell::new(None),
        }
    }
}

impl FakeApi {
    pub fn with_refresh(self, results: Vec<Result<String, ApiError>>) -> Self {
        *self.refresh_results.borrow_mut() = results.into();
        self
    }

    pub fn with_history(self, entries: Vec<HistoryEntry>) -> Self {
        *self.history.borrow_mut() = entries;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn refresh_count(&self) -> usize {
        self.calls.borrow().iter().filter(|c| matches!(c, Call::Refresh)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

pub fn mountain_view() -> GeoLookup {
    GeoLookup {
        geo_info: GeoRecord {
            ip: "8.8.8.8".to_owned(),
            city: Some("Mountain View".to_owned()),
            region: Some("California".to_owned()),
            country: Some("US".to_owned()),
            loc: Some("37.4,-122.1".to_owned()),
            org: Some("AS15169 Google LLC".to_owned()),
            postal: Some("94043".to_owned()),
            timezone: Some("America/Los_Angeles".to_owned()),
        },
    }
}

pub fn history_entry(id: i64, ip: &str) -> HistoryEntry {
    HistoryEntry {
        id,
        ip_address: ip.to_owned(),
        geo_info: GeoRecord {
            ip: ip.to_owned(),
            city: None,
            region: None,
            country: None,
            loc: None,
            org: None,
            postal: None,
            timezone: None,
        },
    }
}

#[async_trait::async_trait(?Send)]
impl GeoApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        self.record(Call::Login(credentials.email.clone()));
        if (credentials.email.as_str(), credentials.password.as_str())
            == (self.accepted.0.as_str(), self.accepted.1.as_str())
        {
            Ok(self.login_token.clone())
        } else {
            Err(ApiError::Auth("Invalid credentials".to_owned()))
        }
    }

    async fn refresh(&self) -> Result<String, ApiError> {
        self.record(Call::Refresh);
        if let Some(hook) = self.on_refresh.borrow().as_ref() {
            hook();
        }
        self.refresh_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Auth("Refresh token missing".to_owned())))
    }

    async fn geo_info(&self, token: &str, ip: &str) -> Result<GeoLookup, ApiError> {
        self.record(Call::GeoInfo { token: token.to_owned(), ip: ip.to_owned() });
        if let Some(hook) = self.on_geo_info.borrow().as_ref() {
            hook();
        }
        self.lookups
            .get(ip)
            .cloned()
            .ok_or_else(|| ApiError::Http { status: 404, message: "IP not found".to_owned() })
    }

    async fn history(&self, token: &str, user_id: u64) -> Result<Vec<HistoryEntry>, ApiError> {
        self.record(Call::History { token: token.to_owned(), user_id });
        match &self.history_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.history.borrow().clone()),
        }
    }

    async fn delete_history(&self, token: &str, ids: &[i64]) -> Result<(), ApiError> {
        self.record(Call::Delete { token: token.to_owned(), ids: ids.to_vec() });
        if let Some(err) = &self.delete_error {
            return Err(err.clone());
        }
        self.history.borrow_mut().retain(|entry| !ids.contains(&entry.id));
        Ok(())
    }

    async fn public_ip(&self) -> Result<String, ApiError> {
        self.record(Call::PublicIp);
        self.public_ip.clone()
    }
}
