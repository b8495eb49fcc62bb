use futures::executor::block_on;

use super::*;
use crate::session::SessionAction;
use crate::state::LocalStore;
use crate::test_support::{Call, FakeApi};

// =============================================================
// ensure_token
// =============================================================

#[test]
fn ensure_token_uses_existing_token_without_refresh() {
    let api = FakeApi::default();
    let store = LocalStore::default();
    store.dispatch(SessionAction::SetToken("T1".to_owned()).into());

    let token = block_on(ensure_token(&api, &store)).expect("token");
    assert_eq!(token, "T1");
    assert!(api.calls().is_empty());
}

#[test]
fn ensure_token_refreshes_and_stores_when_absent() {
    let api = FakeApi::default().with_refresh(vec![Ok("R1".to_owned())]);
    let store = LocalStore::default();

    let token = block_on(ensure_token(&api, &store)).expect("token");
    assert_eq!(token, "R1");
    assert_eq!(store.token().as_deref(), Some("R1"));
    assert_eq!(api.calls(), vec![Call::Refresh]);
}

#[test]
fn ensure_token_propagates_refresh_failure() {
    let api = FakeApi::default().with_refresh(vec![Err(ApiError::Auth("Forbidden".to_owned()))]);
    let store = LocalStore::default();

    let err = block_on(ensure_token(&api, &store)).expect_err("refresh should fail");
    assert_eq!(err, ApiError::Auth("Forbidden".to_owned()));
    assert_eq!(store.token(), None);
}

#[test]
fn ensure_token_discards_token_refreshed_across_logout() {
    let api = FakeApi::default().with_refresh(vec![Ok("R1".to_owned())]);
    let store = LocalStore::default();
    let logout_store = store.clone();
    *api.on_refresh.borrow_mut() = Some(Box::new(move || logout_store.dispatch(SessionAction::Logout.into())));

    let err = block_on(ensure_token(&api, &store)).expect_err("superseded");
    assert_eq!(err, ApiError::Superseded);
    assert_eq!(store.token(), None);
}

// =============================================================
// with_token
// =============================================================

#[test]
fn with_token_skips_operation_when_refresh_fails() {
    let api = FakeApi::default();
    let store = LocalStore::default();
    let mut ran = false;

    let result = block_on(with_token(&api, &store, |_token| {
        ran = true;
        async { Ok::<_, ApiError>(()) }
    }));

    assert!(result.is_err());
    assert!(!ran);
}

#[test]
fn with_token_passes_refreshed_token_to_operation() {
    let api = FakeApi::default().with_refresh(vec![Ok("R7".to_owned())]);
    let store = LocalStore::default();

    let seen = block_on(with_token(&api, &store, |token| async move { Ok::<_, ApiError>(token) }));
    assert_eq!(seen, Ok("R7".to_owned()));
}

#[test]
fn sequential_calls_refresh_only_once() {
    let api = FakeApi::default().with_refresh(vec![Ok("R1".to_owned()), Ok("R2".to_owned())]);
    let store = LocalStore::default();

    block_on(ensure_token(&api, &store)).expect("first");
    let second = block_on(ensure_token(&api, &store)).expect("second");
    assert_eq!(second, "R1");
    assert_eq!(api.refresh_count(), 1);
}
