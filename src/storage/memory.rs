//! In-memory roster store.
//!
//! Rosters live for the lifetime of the process. A single mutex guards the
//! whole map; each operation holds it for an O(6) amount of work.

use crate::core::{Item, Roster, ToggleOutcome, toggle};
use crate::storage::traits::{RosterStore, StoreStats};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-memory roster store.
///
/// # Examples
///
/// ```
/// use pokedex_rs::core::{Item, ToggleOutcome};
/// use pokedex_rs::storage::{MemoryRosterStore, RosterStore};
///
/// let store = MemoryRosterStore::new();
/// let eevee = Item::new(133, "eevee", "", ["normal"]);
/// assert_eq!(store.toggle_item("ash", eevee), ToggleOutcome::Added);
/// assert_eq!(store.get_roster("ash").len(), 1);
/// assert!(store.get_roster("misty").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryRosterStore {
    rosters: Mutex<HashMap<String, Roster>>,
}

impl MemoryRosterStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Operations swap whole rosters in and out, so the map is consistent
    // even if a holder panicked.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Roster>> {
        self.rosters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RosterStore for MemoryRosterStore {
    fn get_roster(&self, identity: &str) -> Roster {
        self.lock().get(identity).cloned().unwrap_or_default()
    }

    fn clear_roster(&self, identity: &str) {
        self.lock().remove(identity);
    }

    fn toggle_item(&self, identity: &str, item: Item) -> ToggleOutcome {
        let mut rosters = self.lock();
        let existing = rosters.remove(identity);
        let had_entry = existing.is_some();

        let (roster, outcome) = toggle(existing.unwrap_or_default(), item);
        if had_entry || outcome == ToggleOutcome::Added {
            rosters.insert(identity.to_string(), roster);
        }
        outcome
    }

    fn stats(&self) -> StoreStats {
        let rosters = self.lock();
        StoreStats {
            identity_count: rosters.len(),
            item_count: rosters.values().map(Roster::len).sum(),
        }
    }
}
