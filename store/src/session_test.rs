use super::*;

fn logged_in(token: &str) -> SessionState {
    SessionState::default()
        .reduce(&SessionAction::LoginPending)
        .reduce(&SessionAction::LoginFulfilled { token: token.to_owned() })
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_default_is_idle_without_token() {
    let state = SessionState::default();
    assert_eq!(state.token, None);
    assert_eq!(state.status, RequestStatus::Idle);
    assert_eq!(state.error, None);
    assert!(!state.has_token());
}

// =============================================================
// Login lifecycle
// =============================================================

#[test]
fn login_pending_sets_loading() {
    let state = SessionState::default().reduce(&SessionAction::LoginPending);
    assert_eq!(state.status, RequestStatus::Loading);
    assert!(state.status.is_loading());
    assert_eq!(state.token, None);
}

#[test]
fn login_fulfilled_stores_token() {
    let state = logged_in("T1");
    assert_eq!(state.status, RequestStatus::Succeeded);
    assert_eq!(state.token.as_deref(), Some("T1"));
}

#[test]
fn login_rejected_records_message_without_token() {
    let state = SessionState::default()
        .reduce(&SessionAction::LoginPending)
        .reduce(&SessionAction::LoginRejected { message: "Invalid credentials".to_owned() });
    assert_eq!(state.status, RequestStatus::Failed);
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    assert_eq!(state.token, None);
}

#[test]
fn login_after_failure_clears_error() {
    let state = SessionState::default()
        .reduce(&SessionAction::LoginRejected { message: "nope".to_owned() })
        .reduce(&SessionAction::LoginPending)
        .reduce(&SessionAction::LoginFulfilled { token: "T2".to_owned() });
    assert_eq!(state.error, None);
    assert_eq!(state.token.as_deref(), Some("T2"));
}

// =============================================================
// Logout / set token
// =============================================================

#[test]
fn logout_clears_token_but_keeps_status() {
    let state = logged_in("T1").reduce(&SessionAction::Logout);
    assert_eq!(state.token, None);
    assert_eq!(state.status, RequestStatus::Succeeded);
    assert_eq!(state.epoch, 1);
}

#[test]
fn logout_twice_is_harmless() {
    let once = logged_in("T1").reduce(&SessionAction::Logout);
    let twice = once.clone().reduce(&SessionAction::Logout);
    assert_eq!(once.token, None);
    assert_eq!(twice.token, None);
    assert_eq!(twice.error, None);
    assert_eq!(twice.status, once.status);
}

#[test]
fn set_token_overwrites_unconditionally() {
    let state = logged_in("T1").reduce(&SessionAction::SetToken("T9".to_owned()));
    assert_eq!(state.token.as_deref(), Some("T9"));
    assert_eq!(state.status, RequestStatus::Succeeded);
}

#[test]
fn status_labels_match_wire_names() {
    assert_eq!(RequestStatus::Idle.as_str(), "idle");
    assert_eq!(RequestStatus::Loading.as_str(), "loading");
    assert_eq!(RequestStatus::Succeeded.as_str(), "succeeded");
    assert_eq!(RequestStatus::Failed.as_str(), "failed");
}
