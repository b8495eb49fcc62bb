//! Geo slice: the last looked-up record and the user's search history.
//!
//! DESIGN
//! ======
//! `status`/`error` are shared by the lookup and the history fetch. A history
//! success only replaces `history`; it never clears an error left by a lookup.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use crate::session::RequestStatus;
use crate::types::{GeoLookup, HistoryEntry};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoState {
    pub current: Option<GeoLookup>,
    pub history: Vec<HistoryEntry>,
    pub status: RequestStatus,
    pub error: Option<String>,
}

impl GeoState {
    /// History entry with `id`, if loaded.
    #[must_use]
    pub fn history_entry(&self, id: i64) -> Option<&HistoryEntry> {
        self.history.iter().find(|entry| entry.id == id)
    }

    /// Ids of all loaded history entries, in server order.
    #[must_use]
    pub fn history_ids(&self) -> Vec<i64> {
        self.history.iter().map(|entry| entry.id).collect()
    }
}

/// Intents that mutate the geo slice.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoAction {
    LookupPending,
    LookupFulfilled(GeoLookup),
    LookupRejected { message: String },
    HistoryFulfilled(Vec<HistoryEntry>),
    HistoryRejected { message: String },
    /// The in-flight lookup will never land (the session logged out).
    LookupAbandoned,
}

impl GeoState {
    /// Apply one action and return the next state.
    #[must_use]
    pub fn reduce(mut self, action: &GeoAction) -> Self {
        match action {
            GeoAction::LookupPending => {
                self.status = RequestStatus::Loading;
            }
            GeoAction::LookupFulfilled(lookup) => {
                self.status = RequestStatus::Succeeded;
                self.current = Some(lookup.clone());
            }
            GeoAction::LookupRejected { message } | GeoAction::HistoryRejected { message } => {
                self.status = RequestStatus::Failed;
                self.error = Some(message.clone());
            }
            GeoAction::HistoryFulfilled(entries) => {
                self.history.clone_from(entries);
            }
            GeoAction::LookupAbandoned => {
                if self.status.is_loading() {
                    self.status = RequestStatus::Idle;
                }
            }
        }
        self
    }
}
