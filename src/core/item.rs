//! Catalog items.
//!
//! An item is one creature from the upstream catalog. Items are immutable
//! once fetched and are identified solely by their `id`.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// The serialized form uses the upstream-facing names `sprite` and `types`
/// so that team payloads posted back by the browser round-trip unchanged.
///
/// # Examples
///
/// ```
/// use pokedex_rs::core::Item;
///
/// let item = Item::new(25, "pikachu", "https://img/25.png", ["electric"]);
/// assert!(item.matches("elec"));
/// assert!(item.matches("PIKA"));
/// assert!(!item.matches("water"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier assigned by the upstream source.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Image URI.
    #[serde(rename = "sprite", default)]
    pub image_ref: String,

    /// Category labels in source order.
    #[serde(rename = "types", default)]
    pub tags: Vec<String>,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub fn new<I, S>(
        id: u32,
        name: impl Into<String>,
        image_ref: impl Into<String>,
        tags: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            image_ref: image_ref.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the name or any tag contains `term`, ignoring case.
    ///
    /// An empty term matches every item.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collects_tags() {
        let item = Item::new(1, "bulbasaur", "s.png", vec!["grass", "poison"]);
        assert_eq!(item.id, 1);
        assert_eq!(item.tags, vec!["grass".to_string(), "poison".to_string()]);
    }

    #[test]
    fn test_matches_name_and_tag() {
        let item = Item::new(6, "Charizard", "", ["fire", "flying"]);
        assert!(item.matches("char"));
        assert!(item.matches("FLY"));
        assert!(item.matches(""));
        assert!(!item.matches("water"));
    }

    #[test]
    fn test_wire_names() {
        let item = Item::new(7, "squirtle", "https://img/7.png", ["water"]);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["sprite"], "https://img/7.png");
        assert_eq!(json["types"][0], "water");
        assert!(json.get("image_ref").is_none());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let item: Item = serde_json::from_str(r#"{"id":132,"name":"ditto"}"#).unwrap();
        assert_eq!(item.id, 132);
        assert!(item.image_ref.is_empty());
        assert!(item.tags.is_empty());
    }
}
