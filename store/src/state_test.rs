use super::*;
use crate::session::RequestStatus;

#[test]
fn reduce_routes_session_actions() {
    let state = AppState::default().reduce(&SessionAction::SetToken("T1".to_owned()).into());
    assert_eq!(state.session.token.as_deref(), Some("T1"));
    assert_eq!(state.geo, GeoState::default());
}

#[test]
fn reduce_routes_geo_actions() {
    let state = AppState::default().reduce(&GeoAction::LookupPending.into());
    assert_eq!(state.geo.status, RequestStatus::Loading);
    assert_eq!(state.session, SessionState::default());
}

#[test]
fn logout_abandons_pending_lookup() {
    let state = AppState::default()
        .reduce(&SessionAction::SetToken("T1".to_owned()).into())
        .reduce(&GeoAction::LookupPending.into())
        .reduce(&SessionAction::Logout.into());
    assert_eq!(state.session.token, None);
    assert_eq!(state.geo.status, RequestStatus::Idle);
}

#[test]
fn local_store_clones_share_state() {
    let store = LocalStore::default();
    let view = store.clone();
    store.dispatch(SessionAction::SetToken("T1".to_owned()).into());
    assert_eq!(view.token().as_deref(), Some("T1"));
}

#[test]
fn local_store_epoch_advances_on_logout() {
    let store = LocalStore::new(AppState::default());
    assert_eq!(store.epoch(), 0);
    store.dispatch(SessionAction::Logout.into());
    store.dispatch(SessionAction::Logout.into());
    assert_eq!(store.epoch(), 2);
    assert_eq!(store.state().session.token, None);
}
