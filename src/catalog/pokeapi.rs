//! PokéAPI client.
//!
//! The listing endpoint only returns name/URL pairs, so each entry needs a
//! second request for its id, sprite and types. Detail requests run through
//! a buffered stream: at most `detail_concurrency` are in flight and results
//! come back in listing order.

use crate::catalog::{CatalogProvider, dedup_by_id};
use crate::config::CatalogConfig;
use crate::core::Item;
use crate::error::{CatalogError, Error, Result};
use async_trait::async_trait;
use futures_util::stream::{self, StreamExt, TryStreamExt};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::Instrument;

/// `GET /pokemon?limit=N` body.
#[derive(Debug, Deserialize)]
struct ListResponse {
    results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    url: String,
}

/// `GET /pokemon/{id}/` body, reduced to the fields we keep.
#[derive(Debug, Deserialize)]
struct PokemonDetail {
    id: u32,
    name: String,
    #[serde(default)]
    sprites: Sprites,
    #[serde(default)]
    types: Vec<TypeSlot>,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: TypeName,
}

#[derive(Debug, Deserialize)]
struct TypeName {
    name: String,
}

impl From<PokemonDetail> for Item {
    fn from(detail: PokemonDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name,
            image_ref: detail.sprites.front_default.unwrap_or_default(),
            tags: detail.types.into_iter().map(|slot| slot.kind.name).collect(),
        }
    }
}

/// HTTP catalog provider for PokéAPI.
///
/// # Examples
///
/// ```no_run
/// use pokedex_rs::catalog::{CatalogProvider, PokeApiClient};
/// use pokedex_rs::config::CatalogConfig;
///
/// # async fn run() -> pokedex_rs::Result<()> {
/// let client = PokeApiClient::new(&CatalogConfig::default())?;
/// let items = client.fetch_catalog().await?;
/// assert!(!items.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    config: CatalogConfig,
}

impl PokeApiClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("pokedex-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> std::result::Result<T, CatalogError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::from_reqwest(&e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::from_reqwest(&e, url))?;
        serde_json::from_slice(&body).map_err(|e| CatalogError::MalformedResponse {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn fetch_detail(&self, url: String) -> std::result::Result<Item, CatalogError> {
        let detail: PokemonDetail = self.get_json(&url).await?;
        Ok(detail.into())
    }
}

#[async_trait]
impl CatalogProvider for PokeApiClient {
    async fn fetch_catalog(&self) -> std::result::Result<Vec<Item>, CatalogError> {
        let span = tracing::info_span!("fetch_catalog", limit = self.config.limit);
        async move {
            let started = Instant::now();
            let listing: ListResponse = self.get_json(&self.config.list_url()).await?;
            tracing::debug!(entries = listing.results.len(), "catalog listing received");

            let items: Vec<Item> = stream::iter(listing.results)
                .map(move |resource| self.fetch_detail(resource.url))
                .buffered(self.config.detail_concurrency)
                .try_collect()
                .await?;
            let items = dedup_by_id(items);

            tracing::info!(
                count = items.len(),
                elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                "catalog fetched"
            );
            Ok(items)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_maps_to_item() {
        let json = r#"{
            "id": 6,
            "name": "charizard",
            "sprites": {"front_default": "https://img/6.png", "back_default": null},
            "types": [
                {"slot": 1, "type": {"name": "fire", "url": "x"}},
                {"slot": 2, "type": {"name": "flying", "url": "y"}}
            ],
            "height": 17
        }"#;
        let detail: PokemonDetail = serde_json::from_str(json).unwrap();
        let item = Item::from(detail);
        assert_eq!(item, Item::new(6, "charizard", "https://img/6.png", ["fire", "flying"]));
    }

    #[test]
    fn test_null_sprite_maps_to_empty() {
        let json = r#"{"id": 10001, "name": "deoxys-attack",
            "sprites": {"front_default": null}, "types": []}"#;
        let detail: PokemonDetail = serde_json::from_str(json).unwrap();
        let item = Item::from(detail);
        assert!(item.image_ref.is_empty());
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_listing_shape() {
        let json = r#"{"count": 1302, "next": null, "previous": null,
            "results": [{"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}]}"#;
        let listing: ListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(listing.results.len(), 1);
        assert_eq!(listing.results[0].url, "https://pokeapi.co/api/v2/pokemon/1/");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CatalogConfig {
            detail_concurrency: 0,
            ..CatalogConfig::default()
        };
        assert!(PokeApiClient::new(&config).is_err());
    }
}
