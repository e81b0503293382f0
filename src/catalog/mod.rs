//! Catalog providers.
//!
//! A provider yields the full list of selectable items. The HTTP client
//! talks to PokéAPI; the static provider serves a fixed list (offline mode
//! and tests); the cache decorator memoizes successful fetches.
//!
//! Providers never retry. A failed fetch is returned to the caller as a
//! [`CatalogError`] with no partial result.

mod cache;
mod fixture;
mod pokeapi;

pub use cache::CachedCatalog;
pub use fixture::StaticCatalog;
pub use pokeapi::PokeApiClient;

use crate::config::CatalogConfig;
use crate::core::Item;
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Trait for catalog sources.
///
/// Implementations must be thread-safe (`Send + Sync`) because one
/// provider is shared by every request handler.
///
/// # Examples
///
/// ```
/// use pokedex_rs::catalog::{CatalogProvider, StaticCatalog};
/// use pokedex_rs::core::Item;
///
/// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// let catalog = StaticCatalog::new(vec![Item::new(1, "bulbasaur", "", ["grass"])]);
/// let items = rt.block_on(catalog.fetch_catalog()).unwrap();
/// assert_eq!(items.len(), 1);
/// ```
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetches every item, deduplicated by id, in source order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the source is unreachable, times out,
    /// answers with an error status, or sends a body that cannot be decoded.
    async fn fetch_catalog(&self) -> std::result::Result<Vec<Item>, CatalogError>;
}

#[async_trait]
impl<P: CatalogProvider + ?Sized> CatalogProvider for Arc<P> {
    async fn fetch_catalog(&self) -> std::result::Result<Vec<Item>, CatalogError> {
        (**self).fetch_catalog().await
    }
}

/// Creates the provider described by `config`.
///
/// A configured catalog file takes precedence over the HTTP API. When
/// `cache_ttl` is set the provider is wrapped in a [`CachedCatalog`].
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded or the HTTP client
/// cannot be built.
pub fn create_catalog(
    config: &CatalogConfig,
    cache_ttl: Option<Duration>,
) -> Result<Arc<dyn CatalogProvider>> {
    let provider: Arc<dyn CatalogProvider> = match &config.catalog_file {
        Some(path) => Arc::new(StaticCatalog::from_file(path)?),
        None => Arc::new(PokeApiClient::new(config)?),
    };

    Ok(match cache_ttl {
        Some(ttl) => Arc::new(CachedCatalog::new(provider, ttl)),
        None => provider,
    })
}

/// Drops items whose id was already seen, keeping first occurrences.
pub(crate) fn dedup_by_id(mut items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::with_capacity(items.len());
    items.retain(|item| seen.insert(item.id));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first() {
        let items = vec![
            Item::new(1, "bulbasaur", "", ["grass"]),
            Item::new(2, "ivysaur", "", ["grass"]),
            Item::new(1, "duplicate", "", ["grass"]),
        ];
        let deduped = dedup_by_id(items);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].name, "bulbasaur");
        assert_eq!(deduped[1].id, 2);
    }

    #[tokio::test]
    async fn test_create_catalog_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dex.json");
        std::fs::write(
            &path,
            r#"[{"id":25,"name":"pikachu","sprite":"p.png","types":["electric"]}]"#,
        )
        .unwrap();

        let config = CatalogConfig {
            catalog_file: Some(path),
            ..CatalogConfig::default()
        };
        let provider = create_catalog(&config, Some(Duration::from_secs(60))).unwrap();
        let items = provider.fetch_catalog().await.unwrap();
        assert_eq!(items, vec![Item::new(25, "pikachu", "p.png", ["electric"])]);
    }

    #[test]
    fn test_create_catalog_missing_file() {
        let config = CatalogConfig {
            catalog_file: Some("/definitely/not/here.json".into()),
            ..CatalogConfig::default()
        };
        assert!(create_catalog(&config, None).is_err());
    }

    #[test]
    fn test_create_catalog_http() {
        assert!(create_catalog(&CatalogConfig::default(), None).is_ok());
    }
}
