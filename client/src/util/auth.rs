//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page leaves for `/home` once a login succeeds. Logout keeps the
//! last login status, so the token is checked as well; otherwise returning to
//! `/` after a logout would bounce straight back to `/home`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use store::session::{RequestStatus, SessionState};

use crate::state::store::AppStore;

pub const LOGIN_ROUTE: &str = "/";
pub const HOME_ROUTE: &str = "/home";

/// Whether the session has just completed a login and holds a token.
pub fn is_logged_in(session: &SessionState) -> bool {
    session.status == RequestStatus::Succeeded && session.has_token()
}

/// Navigate to `/home` whenever the session becomes logged in.
pub fn install_home_redirect<F>(store: AppStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if store.with(|state| is_logged_in(&state.session)) {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });
}
