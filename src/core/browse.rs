//! Catalog browsing: search filtering and pagination.

use crate::core::Item;
use serde::Serialize;

/// Default number of items shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Normalizes a raw search term (lowercased, otherwise verbatim).
#[must_use]
pub fn normalize_term(raw: Option<&str>) -> String {
    raw.map(str::to_lowercase).unwrap_or_default()
}

/// Parses a 1-based page number.
///
/// Missing, unparsable and zero values all yield page 1.
#[must_use]
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1)
}

/// Returns the items matching `term`, in catalog order.
#[must_use]
pub fn filter_items<'a>(items: &'a [Item], term: &str) -> Vec<&'a Item> {
    items.iter().filter(|item| item.matches(term)).collect()
}

/// Pagination metadata for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Requested page (1-based).
    pub current_page: usize,
    /// Total number of pages; zero when nothing matched.
    pub total_pages: usize,
    /// A later page exists.
    pub has_next_page: bool,
    /// An earlier page exists.
    pub has_prev_page: bool,
}

impl Pagination {
    /// Computes pagination for `total` items.
    ///
    /// A zero `page_size` is treated as one.
    #[must_use]
    pub const fn new(total: usize, page: usize, page_size: usize) -> Self {
        let total_pages = total.div_ceil(effective_page_size(page_size));
        Self {
            current_page: page,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }
}

const fn effective_page_size(page_size: usize) -> usize {
    if page_size == 0 { 1 } else { page_size }
}

/// One page of items with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

/// Slices `items` into the requested 1-based page.
///
/// Pages past the end are empty.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = effective_page_size(page_size);
    let pagination = Pagination::new(items.len(), page, page_size);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        pagination,
    }
}

/// Filters the catalog by `term` and returns the requested page.
#[must_use]
pub fn browse(items: &[Item], term: &str, page: usize, page_size: usize) -> Page<Item> {
    let filtered: Vec<Item> = filter_items(items, term).into_iter().cloned().collect();
    paginate(&filtered, page, page_size)
}
