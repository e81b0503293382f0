//! Fixed in-memory catalog.

use crate::catalog::{CatalogProvider, dedup_by_id};
use crate::core::Item;
use crate::error::{CatalogError, Error, Result};
use async_trait::async_trait;
use std::path::Path;

/// Catalog backed by a fixed list of items.
///
/// Used when serving offline from a JSON file, and as a test double.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: Vec<Item>,
}

impl StaticCatalog {
    /// Creates a catalog from `items`, dropping repeated ids.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: dedup_by_id(items),
        }
    }

    /// Loads a catalog from a JSON array of items.
    ///
    /// The file uses the same item shape the HTTP endpoints emit
    /// (`id`, `name`, `sprite`, `types`).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array
    /// of items.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "failed to read catalog file {}: {e}",
                path.display()
            ))
        })?;
        let items: Vec<Item> =
            serde_json::from_str(&content).map_err(|e| CatalogError::MalformedResponse {
                url: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(items))
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn fetch_catalog(&self) -> std::result::Result<Vec<Item>, CatalogError> {
        Ok(self.items.clone())
    }
}
