//! Time-bounded memoization of catalog fetches.

use crate::catalog::CatalogProvider;
use crate::core::Item;
use crate::error::CatalogError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

struct Snapshot {
    fetched_at: Instant,
    items: Arc<[Item]>,
}

/// Wraps a provider and reuses a successful fetch for `ttl`.
///
/// The lock is held across the upstream call, so concurrent callers that
/// miss the cache share a single fetch. Failures are not cached.
pub struct CachedCatalog<P> {
    inner: P,
    ttl: Duration,
    snapshot: Mutex<Option<Snapshot>>,
}

impl<P: CatalogProvider> CachedCatalog<P> {
    /// Creates a cache over `inner`.
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            snapshot: Mutex::new(None),
        }
    }
}

#[async_trait]
impl<P: CatalogProvider> CatalogProvider for CachedCatalog<P> {
    async fn fetch_catalog(&self) -> Result<Vec<Item>, CatalogError> {
        let mut snapshot = self.snapshot.lock().await;

        if let Some(cached) = snapshot.as_ref()
            && cached.fetched_at.elapsed() < self.ttl
        {
            tracing::debug!(count = cached.items.len(), "catalog cache hit");
            return Ok(cached.items.to_vec());
        }

        let items = self.inner.fetch_catalog().await?;
        *snapshot = Some(Snapshot {
            fetched_at: Instant::now(),
            items: items.clone().into(),
        });
        Ok(items)
    }
}
