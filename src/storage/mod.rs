//! Roster storage.
//!
//! Rosters are kept in process memory only and are lost on restart.

pub mod memory;
pub mod traits;

pub use memory::MemoryRosterStore;
pub use traits::{RosterStore, StoreStats};

/// Identity used when no session mechanism supplies one.
pub const DEFAULT_IDENTITY: &str = "demo-user";
