//! Rosters and the toggle rule.
//!
//! A roster is the ordered, capped team one identity has picked from the
//! catalog. The add-or-remove rule is expressed as the pure function
//! [`toggle`], which the stores wrap with their own locking.

use crate::core::Item;
use serde::{Deserialize, Serialize};

/// Maximum number of items a roster may hold.
pub const ROSTER_CAPACITY: usize = 6;

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    /// Item was absent and has been appended.
    Added,
    /// Item was present and has been removed.
    Removed,
    /// Roster was full; nothing changed.
    Rejected,
}

impl ToggleOutcome {
    /// Collapses the outcome into the two-valued success flag.
    ///
    /// `Added` and `Removed` are successes; `Rejected` is not.
    #[must_use]
    pub const fn is_success(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// An ordered team of at most [`ROSTER_CAPACITY`] distinct items.
///
/// The fields are private so the capacity and uniqueness invariants can
/// only change through [`toggle`].
///
/// # Examples
///
/// ```
/// use pokedex_rs::core::{Item, Roster, ToggleOutcome, toggle};
///
/// let pikachu = Item::new(25, "pikachu", "", ["electric"]);
/// let (roster, outcome) = toggle(Roster::default(), pikachu.clone());
/// assert_eq!(outcome, ToggleOutcome::Added);
/// assert!(roster.contains(25));
///
/// let (roster, outcome) = toggle(roster, pikachu);
/// assert_eq!(outcome, ToggleOutcome::Removed);
/// assert!(roster.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    items: Vec<Item>,
}

impl Roster {
    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the roster holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if no further item can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= ROSTER_CAPACITY
    }

    /// Returns true if an item with `id` is in the roster.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterates over items in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Consumes the roster, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Applies the toggle rule to `roster`.
///
/// Branches are checked in order:
///
/// 1. an item with the same id is present: it is removed ([`ToggleOutcome::Removed`]);
/// 2. the roster is full: nothing changes ([`ToggleOutcome::Rejected`]);
/// 3. otherwise `item` is appended ([`ToggleOutcome::Added`]).
///
/// Removal keeps the relative order of the remaining items.
#[must_use]
pub fn toggle(mut roster: Roster, item: Item) -> (Roster, ToggleOutcome) {
    if let Some(pos) = roster.items.iter().position(|p| p.id == item.id) {
        roster.items.remove(pos);
        return (roster, ToggleOutcome::Removed);
    }

    if roster.is_full() {
        return (roster, ToggleOutcome::Rejected);
    }

    roster.items.push(item);
    (roster, ToggleOutcome::Added)
}
