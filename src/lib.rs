//! # Pokédex-RS
//!
//! A Pokédex web application with a six-slot team builder.
//!
//! The catalog is fetched from PokéAPI (or a local JSON file), filtered by
//! name or type, and paginated. Each identity keeps a team of at most six
//! Pokémon in process memory; selecting a Pokémon toggles its membership.
//!
//! ## Features
//!
//! - **Catalog**: Concurrent detail fetches with optional TTL caching
//! - **Team Builder**: Capacity-bounded toggle rule, safe under concurrency
//! - **Web**: Server-rendered HTML page plus JSON endpoints
//! - **CLI**: `serve` to run the server, `catalog` to print a page

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod storage;
pub mod web;

// Re-export commonly used types at crate root
pub use error::{CatalogError, Error, Result};

// Re-export core domain types
pub use core::{
    DEFAULT_PAGE_SIZE, Item, Page, Pagination, ROSTER_CAPACITY, Roster, ToggleOutcome, browse,
    toggle,
};

// Re-export catalog types
pub use catalog::{CachedCatalog, CatalogProvider, PokeApiClient, StaticCatalog, create_catalog};

// Re-export storage types
pub use storage::{DEFAULT_IDENTITY, MemoryRosterStore, RosterStore, StoreStats};

// Re-export configuration
pub use config::{AppConfig, CatalogConfig};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};

// Re-export web types
pub use web::{AppState, WebSettings, router};
