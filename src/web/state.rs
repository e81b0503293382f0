//! Shared state for request handlers.

use crate::catalog::CatalogProvider;
use crate::config::AppConfig;
use crate::core::DEFAULT_PAGE_SIZE;
use crate::storage::{DEFAULT_IDENTITY, RosterStore};
use std::sync::Arc;

/// Per-server settings handlers read on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSettings {
    /// Identity whose roster every request manipulates.
    pub identity: String,
    /// Items per catalog page.
    pub page_size: usize,
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            identity: DEFAULT_IDENTITY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<&AppConfig> for WebSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            identity: config.identity.clone(),
            page_size: config.page_size,
        }
    }
}

/// Shared state for handlers.
///
/// The catalog and the roster store are injected so tests can substitute
/// fixed catalogs and fresh stores.
#[derive(Clone)]
pub struct AppState {
    /// Catalog source.
    pub catalog: Arc<dyn CatalogProvider>,
    /// Roster store.
    pub rosters: Arc<dyn RosterStore>,
    /// Server settings.
    pub settings: Arc<WebSettings>,
}

impl AppState {
    /// Creates state with default settings.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogProvider>, rosters: Arc<dyn RosterStore>) -> Self {
        Self::with_settings(catalog, rosters, WebSettings::default())
    }

    /// Creates state with explicit settings.
    #[must_use]
    pub fn with_settings(
        catalog: Arc<dyn CatalogProvider>,
        rosters: Arc<dyn RosterStore>,
        settings: WebSettings,
    ) -> Self {
        Self {
            catalog,
            rosters,
            settings: Arc::new(settings),
        }
    }

    /// Identity for the current request.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.settings.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::storage::MemoryRosterStore;

    #[test]
    fn test_settings_from_config() {
        let config = AppConfig {
            identity: "red".to_string(),
            page_size: 12,
            ..AppConfig::default()
        };
        let settings = WebSettings::from(&config);
        assert_eq!(settings.identity, "red");
        assert_eq!(settings.page_size, 12);
    }

    #[test]
    fn test_default_identity() {
        let state = AppState::new(
            Arc::new(StaticCatalog::default()),
            Arc::new(MemoryRosterStore::new()),
        );
        assert_eq!(state.identity(), "demo-user");
        assert_eq!(state.settings.page_size, 24);
    }
}
