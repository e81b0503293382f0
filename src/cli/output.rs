//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{Item, Page};
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats one catalog page.
#[must_use]
pub fn format_catalog_page(page: &Page<Item>, search_term: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_catalog_page_text(page, search_term),
        OutputFormat::Json => {
            #[derive(Serialize)]
            #[serde(rename_all = "camelCase")]
            struct CatalogOutput<'a> {
                pokemon_list: &'a [Item],
                pagination: &'a crate::core::Pagination,
                search_term: &'a str,
            }
            format_json(&CatalogOutput {
                pokemon_list: &page.items,
                pagination: &page.pagination,
                search_term,
            })
        }
    }
}

fn format_catalog_page_text(page: &Page<Item>, search_term: &str) -> String {
    if page.items.is_empty() {
        return if search_term.is_empty() {
            "No Pokémon found.\n".to_string()
        } else {
            format!("No Pokémon matching \"{search_term}\".\n")
        };
    }

    let mut output = String::new();
    let _ = writeln!(output, "{:<6} {:<20} Types", "ID", "Name");
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for item in &page.items {
        let _ = writeln!(
            output,
            "{:<6} {:<20} {}",
            item.id,
            truncate(&item.name, 20),
            item.tags.join(", ")
        );
    }

    let _ = writeln!(
        output,
        "\nPage {} of {}",
        page.pagination.current_page, page.pagination.total_pages
    );
    output
}

/// Formats an error for output.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {e}\"}}"))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
