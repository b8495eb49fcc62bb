//! Signal-backed application store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once from `App` via context. Operations from `store::ops` write
//! through [`StateHandle`]; views read reactively with [`AppStore::with`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;
use store::{AppAction, AppState, StateHandle};

/// `Copy` handle to the reactive [`AppState`].
#[derive(Clone, Copy, Debug)]
pub struct AppStore {
    state: RwSignal<AppState>,
}

impl AppStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AppState::default()) }
    }

    /// Tracked read: re-runs the enclosing effect or view when state changes.
    pub fn with<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        self.state.with(f)
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHandle for AppStore {
    fn state(&self) -> AppState {
        self.state.get_untracked()
    }

    fn dispatch(&self, action: AppAction) {
        self.state.update(|state| *state = std::mem::take(state).reduce(&action));
    }

    fn token(&self) -> Option<String> {
        self.state.with_untracked(|state| state.session.token.clone())
    }

    fn epoch(&self) -> u64 {
        self.state.with_untracked(|state| state.session.epoch)
    }
}
