//! Runtime configuration.
//!
//! Values arrive from CLI flags (with `POKEDEX_*` environment fallbacks)
//! and are validated here before anything is started.

use crate::core::DEFAULT_PAGE_SIZE;
use crate::error::{Error, Result};
use crate::storage::DEFAULT_IDENTITY;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default upstream API root.
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Default number of catalog entries requested from upstream.
pub const DEFAULT_CATALOG_LIMIT: usize = 151;

/// Default upstream request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of detail requests in flight.
pub const DEFAULT_DETAIL_CONCURRENCY: usize = 16;

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Where the catalog comes from and how it is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Upstream API root, without trailing slash.
    pub base_url: String,
    /// Number of entries to list.
    pub limit: usize,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum detail requests in flight.
    pub detail_concurrency: usize,
    /// Serve a fixed catalog from this JSON file instead of the API.
    pub catalog_file: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            limit: DEFAULT_CATALOG_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
            catalog_file: None,
        }
    }
}

impl CatalogConfig {
    /// Checks the invariants the fetcher relies on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a value is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.catalog_file.is_none() && self.base_url.trim().is_empty() {
            return Err(Error::config("api url must not be empty"));
        }
        if self.limit == 0 {
            return Err(Error::config("catalog limit must be positive"));
        }
        if self.detail_concurrency == 0 {
            return Err(Error::config("concurrency must be positive"));
        }
        if self.timeout.is_zero() {
            return Err(Error::config("timeout must be positive"));
        }
        Ok(())
    }

    /// URL of the listing request.
    #[must_use]
    pub fn list_url(&self) -> String {
        format!(
            "{}/pokemon?limit={}",
            self.base_url.trim_end_matches('/'),
            self.limit
        )
    }
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen address.
    pub bind: SocketAddr,
    /// Identity whose roster every request manipulates.
    pub identity: String,
    /// Items per catalog page.
    pub page_size: usize,
    /// Memoize successful catalog fetches for this long.
    pub cache_ttl: Option<Duration>,
    /// Catalog source.
    pub catalog: CatalogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            identity: DEFAULT_IDENTITY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            cache_ttl: None,
            catalog: CatalogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Checks all values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a value is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.identity.trim().is_empty() {
            return Err(Error::config("identity must not be empty"));
        }
        if self.page_size == 0 {
            return Err(Error::config("page size must be positive"));
        }
        self.catalog.validate()
    }
}

/// Converts a TTL in seconds into an optional duration; zero disables.
#[must_use]
pub const fn ttl_from_secs(secs: u64) -> Option<Duration> {
    if secs == 0 {
        None
    } else {
        Some(Duration::from_secs(secs))
    }
}
