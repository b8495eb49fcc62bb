//! Checkbox selection over the loaded history list.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

use crate::types::HistoryEntry;

/// Set of history ids the user has ticked. Iteration order is ascending id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistorySelection {
    ids: BTreeSet<i64>,
}

impl HistorySelection {
    /// Flip the selection state of `id`. Returns whether it is now selected.
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn ids(&self) -> Vec<i64> {
        self.ids.iter().copied().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that no longer appear in `history`, e.g. after a re-fetch.
    pub fn retain_existing(&mut self, history: &[HistoryEntry]) {
        self.ids.retain(|id| history.iter().any(|entry| entry.id == *id));
    }
}
