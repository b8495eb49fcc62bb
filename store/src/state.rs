//! Application-state container shared by all front ends.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every write goes through `StateHandle::dispatch`, one reducer step at a
//! time. The browser wraps a Leptos signal, the CLI and tests use
//! [`LocalStore`].

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::geo::{GeoAction, GeoState};
use crate::session::{SessionAction, SessionState};

/// Both slices, owned together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub session: SessionState,
    pub geo: GeoState,
}

/// An intent addressed to one slice.
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    Session(SessionAction),
    Geo(GeoAction),
}

impl From<SessionAction> for AppAction {
    fn from(action: SessionAction) -> Self {
        Self::Session(action)
    }
}

impl From<GeoAction> for AppAction {
    fn from(action: GeoAction) -> Self {
        Self::Geo(action)
    }
}

impl AppState {
    /// Route `action` to its slice reducer.
    ///
    /// Logout also abandons any in-flight lookup: its result will be dropped,
    /// so the geo slice must not stay `Loading`.
    #[must_use]
    pub fn reduce(self, action: &AppAction) -> Self {
        match action {
            AppAction::Session(action @ SessionAction::Logout) => Self {
                session: self.session.reduce(action),
                geo: self.geo.reduce(&GeoAction::LookupAbandoned),
            },
            AppAction::Session(action) => Self { session: self.session.reduce(action), ..self },
            AppAction::Geo(action) => Self { geo: self.geo.reduce(action), ..self },
        }
    }
}

/// Read/dispatch access to an [`AppState`] container.
pub trait StateHandle {
    /// Snapshot of the current state.
    fn state(&self) -> AppState;

    /// Apply one action.
    fn dispatch(&self, action: AppAction);

    /// Current bearer token, if any.
    fn token(&self) -> Option<String> {
        self.state().session.token
    }

    /// Current logout epoch.
    fn epoch(&self) -> u64 {
        self.state().session.epoch
    }
}

/// Single-threaded in-memory container.
///
/// Clones share the same state.
#[derive(Clone, Default)]
pub struct LocalStore {
    inner: Rc<RefCell<AppState>>,
}

impl LocalStore {
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self { inner: Rc::new(RefCell::new(state)) }
    }
}

impl StateHandle for LocalStore {
    fn state(&self) -> AppState {
        self.inner.borrow().clone()
    }

    fn dispatch(&self, action: AppAction) {
        let current = std::mem::take(&mut *self.inner.borrow_mut());
        *self.inner.borrow_mut() = current.reduce(&action);
    }

    fn token(&self) -> Option<String> {
        self.inner.borrow().session.token.clone()
    }

    fn epoch(&self) -> u64 {
        self.inner.borrow().session.epoch
    }
}
