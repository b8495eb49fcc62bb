//! Async operations ("thunks") that drive the slices.
//!
//! Each operation reads the container, performs its HTTP work through
//! `GeoApi`, and dispatches the outcome. Protected calls go through
//! `policy::with_token`. Results that arrive after a logout are dropped and
//! reported as [`ApiError::Superseded`].

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;

use crate::api::{self, GeoApi};
use crate::error::ApiError;
use crate::geo::GeoAction;
use crate::policy;
use crate::session::SessionAction;
use crate::state::StateHandle;
use crate::types::{Credentials, GeoLookup, HistoryEntry};

/// Exchange `credentials` for an access token.
///
/// # Errors
///
/// Returns the backend rejection after recording it in the session slice.
pub async fn login<A, S>(api: &A, store: &S, credentials: &Credentials) -> Result<(), ApiError>
where
    A: GeoApi + ?Sized,
    S: StateHandle + ?Sized,
{
    store.dispatch(SessionAction::LoginPending.into());
    match api.login(credentials).await {
        Ok(token) => {
            log::info!("login succeeded for {}", credentials.email);
            store.dispatch(SessionAction::LoginFulfilled { token }.into());
            Ok(())
        }
        Err(err) => {
            log::warn!("login failed for {}: {err}", credentials.email);
            store.dispatch(SessionAction::LoginRejected { message: err.to_string() }.into());
            Err(err)
        }
    }
}

/// Drop the session token. Calling it repeatedly is harmless.
pub fn logout<S>(store: &S)
where
    S: StateHandle + ?Sized,
{
    store.dispatch(SessionAction::Logout.into());
}

/// Overwrite the session token, e.g. with one supplied out of band.
pub fn set_token<S>(store: &S, token: impl Into<String>)
where
    S: StateHandle + ?Sized,
{
    store.dispatch(SessionAction::SetToken(token.into()).into());
}

/// Look up `ip` and store the result as the current record.
///
/// # Errors
///
/// Refresh or lookup failures, after recording them in the geo slice.
pub async fn fetch_geo_info<A, S>(api: &A, store: &S, ip: &str) -> Result<GeoLookup, ApiError>
where
    A: GeoApi + ?Sized,
    S: StateHandle + ?Sized,
{
    let address = match api::parse_ip(ip) {
        Ok(parsed) => parsed.to_string(),
        Err(err) => {
            log::warn!("rejecting lookup: {err}");
            store.dispatch(GeoAction::LookupRejected { message: err.to_string() }.into());
            return Err(err);
        }
    };
    let ip = address.as_str();

    let epoch = store.epoch();
    store.dispatch(GeoAction::LookupPending.into());

    let result = policy::with_token(api, store, |token| async move { api.geo_info(&token, ip).await }).await;
    if store.epoch() != epoch {
        log::debug!("dropping lookup result for {ip}: session logged out");
        return Err(ApiError::Superseded);
    }

    match result {
        Ok(lookup) => {
            store.dispatch(GeoAction::LookupFulfilled(lookup.clone()).into());
            Ok(lookup)
        }
        Err(err) => {
            store.dispatch(GeoAction::LookupRejected { message: err.to_string() }.into());
            Err(err)
        }
    }
}

/// Fetch the search history for `user_id`, replacing the loaded list.
///
/// # Errors
///
/// Refresh or fetch failures, after recording them in the geo slice.
pub async fn fetch_history<A, S>(api: &A, store: &S, user_id: u64) -> Result<Vec<HistoryEntry>, ApiError>
where
    A: GeoApi + ?Sized,
    S: StateHandle + ?Sized,
{
    let epoch = store.epoch();
    let result = policy::with_token(api, store, |token| async move { api.history(&token, user_id).await }).await;
    if store.epoch() != epoch {
        log::debug!("dropping history for user {user_id}: session logged out");
        return Err(ApiError::Superseded);
    }

    match result {
        Ok(entries) => {
            store.dispatch(GeoAction::HistoryFulfilled(entries.clone()).into());
            Ok(entries)
        }
        Err(err) => {
            store.dispatch(GeoAction::HistoryRejected { message: err.to_string() }.into());
            Err(err)
        }
    }
}

/// Delete history entries `ids`, then re-fetch the history of `user_id`.
///
/// An empty `ids` is a no-op returning the loaded history. Delete failures
/// are logged and returned but never written into the geo slice.
///
/// # Errors
///
/// Refresh, delete, or re-fetch failures.
pub async fn delete_history<A, S>(
    api: &A,
    store: &S,
    ids: &[i64],
    user_id: u64,
) -> Result<Vec<HistoryEntry>, ApiError>
where
    A: GeoApi + ?Sized,
    S: StateHandle + ?Sized,
{
    if ids.is_empty() {
        return Ok(store.state().geo.history);
    }

    policy::with_token(api, store, |token| async move { api.delete_history(&token, ids).await })
        .await
        .inspect_err(|err| log::error!("error deleting history items {ids:?}: {err}"))?;

    fetch_history(api, store, user_id).await
}

/// Ask the public IP service for the caller's address.
///
/// Failures are logged and collapse to `None`.
pub async fn discover_public_ip<A>(api: &A) -> Option<String>
where
    A: GeoApi + ?Sized,
{
    match api.public_ip().await {
        Ok(ip) if !ip.trim().is_empty() => Some(ip.trim().to_owned()),
        Ok(_) => {
            log::warn!("public IP service returned an empty address");
            None
        }
        Err(err) => {
            log::error!("error fetching IP address: {err}");
            None
        }
    }
}

/// Discover the caller's public IP and look it up.
///
/// Returns `Ok(None)` when discovery fails; the geo slice is untouched then.
///
/// # Errors
///
/// Lookup failures from [`fetch_geo_info`].
pub async fn lookup_own_ip<A, S>(api: &A, store: &S) -> Result<Option<GeoLookup>, ApiError>
where
    A: GeoApi + ?Sized,
    S: StateHandle + ?Sized,
{
    let Some(ip) = discover_public_ip(api).await else {
        return Ok(None);
    };
    fetch_geo_info(api, store, &ip).await.map(Some)
}
