//! Core domain models for the Pokédex.
//!
//! This module contains catalog items, rosters with their toggle rule, and
//! the search/pagination helpers. These are pure domain models with no I/O
//! dependencies.

pub mod browse;
pub mod item;
pub mod roster;

pub use browse::{DEFAULT_PAGE_SIZE, Page, Pagination, browse, filter_items, paginate};
pub use item::Item;
pub use roster::{ROSTER_CAPACITY, Roster, ToggleOutcome, toggle};
