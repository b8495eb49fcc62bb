//! Authenticated-request policy.
//!
//! Every protected call goes through [`with_token`]: use the session token
//! when present, otherwise refresh once, store the new token, and only then
//! run the call. A failed refresh short-circuits; the protected call is never
//! sent without a token.
//!
//! Two protected calls racing an in-flight refresh may each refresh; there is
//! no de-duplication.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::future::Future;

use crate::api::GeoApi;
use crate::error::ApiError;
use crate::session::SessionAction;
use crate::state::StateHandle;

/// Return the current token, refreshing it first if the session has none.
///
/// # Errors
///
/// Propagates the refresh error, or [`ApiError::Superseded`] if the session
/// was logged out while the refresh was in flight.
pub async fn ensure_token<A, S>(api: &A, store: &S) -> Result<String, ApiError>
where
    A: GeoApi + ?Sized,
    S: StateHandle + ?Sized,
{
    if let Some(token) = store.token() {
        return Ok(token);
    }

    let epoch = store.epoch();
    log::debug!("no access token in session; refreshing");
    let token = api.refresh().await.inspect_err(|err| log::warn!("token refresh failed: {err}"))?;

    if store.epoch() != epoch {
        log::debug!("discarding refreshed token: session logged out during refresh");
        return Err(ApiError::Superseded);
    }
    store.dispatch(SessionAction::SetToken(token.clone()).into());
    Ok(token)
}

/// Run `op` with a valid token.
///
/// # Errors
///
/// Returns the refresh error without invoking `op`, or whatever `op` returns.
pub async fn with_token<A, S, F, Fut, T>(api: &A, store: &S, op: F) -> Result<T, ApiError>
where
    A: GeoApi + ?Sized,
    S: StateHandle + ?Sized,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let token = ensure_token(api, store).await?;
    op(token).await
}
