//! Roster store trait definition.
//!
//! Defines the interface for roster backends so request handlers can be
//! given any implementation behind an `Arc<dyn RosterStore>`.

use crate::core::{Item, Roster, ToggleOutcome};
use serde::Serialize;

/// Trait for per-identity roster storage.
///
/// Implementations own their locking: every method takes `&self` and must
/// be safe to call from concurrent requests. None of the operations can
/// fail; an unknown identity simply has an empty roster.
pub trait RosterStore: Send + Sync {
    /// Returns the identity's roster, or an empty one.
    fn get_roster(&self, identity: &str) -> Roster;

    /// Removes the identity's roster entirely.
    ///
    /// Idempotent.
    fn clear_roster(&self, identity: &str);

    /// Adds or removes `item` from the identity's roster.
    ///
    /// The read-modify-write is atomic with respect to other calls for the
    /// same identity. The entry is created on the first successful add.
    fn toggle_item(&self, identity: &str, item: Item) -> ToggleOutcome;

    /// Gets store statistics.
    fn stats(&self) -> StoreStats;
}

/// Roster store statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of identities with a roster entry.
    pub identity_count: usize,
    /// Total number of items across all rosters.
    pub item_count: usize,
}
