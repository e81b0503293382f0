//! HTML rendering for the Pokédex page.
//!
//! Pages are assembled with `fmt::Write`; every string that originates
//! from the user or from upstream goes through [`escape_html`].

use crate::core::{Item, ROSTER_CAPACITY};
use crate::web::handlers::{INTENT_CLEAR, INTENT_TOGGLE, LoaderData};
use axum::http::StatusCode;
use std::fmt::Write;

/// Classes used for tags without a dedicated color.
pub const DEFAULT_TAG_COLOR: &str = "bg-gray-400 text-white";

const TAG_COLORS: &[(&str, &str)] = &[
    ("normal", "bg-gray-400 text-white"),
    ("fire", "bg-red-500 text-white"),
    ("water", "bg-blue-500 text-white"),
    ("electric", "bg-yellow-400 text-black"),
    ("grass", "bg-green-500 text-white"),
    ("ice", "bg-blue-200 text-black"),
    ("fighting", "bg-red-700 text-white"),
    ("poison", "bg-purple-500 text-white"),
    ("ground", "bg-yellow-600 text-white"),
    ("flying", "bg-indigo-400 text-white"),
    ("psychic", "bg-pink-500 text-white"),
    ("bug", "bg-green-600 text-white"),
    ("rock", "bg-yellow-800 text-white"),
    ("ghost", "bg-purple-700 text-white"),
    ("dragon", "bg-indigo-700 text-white"),
    ("dark", "bg-gray-800 text-white"),
    ("steel", "bg-gray-500 text-white"),
    ("fairy", "bg-pink-400 text-white"),
];

/// What to render for one page view.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    /// Loaded page data.
    pub data: &'a LoaderData,
    /// Flash message from a just-applied action.
    pub message: Option<&'a str>,
}

/// CSS classes for a type badge. Lookup ignores case.
#[must_use]
pub fn tag_color(tag: &str) -> &'static str {
    let tag = tag.to_lowercase();
    TAG_COLORS
        .iter()
        .find(|(name, _)| *name == tag)
        .map_or(DEFAULT_TAG_COLOR, |(_, classes)| *classes)
}

/// Escapes text for HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Builds `?page=N[&search=TERM]`.
#[must_use]
pub fn page_query(page: usize, search: &str) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    if !search.is_empty() {
        query.append_pair("search", search);
    }
    format!("?{}", query.finish())
}

/// Renders the full Pokédex page.
#[must_use]
pub fn render_page(view: &PageView<'_>) -> String {
    let data = view.data;
    let team = &data.user_team;
    let action = page_query(data.pagination.current_page, &data.search_term);

    let mut out = String::new();
    push_head(&mut out, "Pokédex");
    out.push_str("<div class=\"container mx-auto p-4\">\n");
    out.push_str("<h1 class=\"text-4xl font-bold mb-8 text-center\">Pokédex</h1>\n");

    if let Some(message) = view.message {
        let _ = writeln!(
            out,
            "<div class=\"mb-4 p-3 rounded-lg bg-blue-100\" role=\"status\">{}</div>",
            escape_html(message)
        );
    }

    // Team panel
    out.push_str("<div class=\"mb-8 bg-white rounded-lg shadow-md p-6\">\n");
    out.push_str("<div class=\"flex justify-between items-center mb-4\">\n");
    let _ = writeln!(
        out,
        "<h2 class=\"text-2xl font-bold\">Your Team ({}/{ROSTER_CAPACITY})</h2>",
        team.len()
    );
    if !team.is_empty() {
        let _ = writeln!(
            out,
            "<form method=\"post\" action=\"{}\"><input type=\"hidden\" name=\"intent\" value=\"{INTENT_CLEAR}\">\
             <button type=\"submit\" class=\"px-4 py-2 bg-red-500 text-white rounded-lg hover:bg-red-600 transition\">Clear Team</button></form>",
            escape_html(&action)
        );
    }
    out.push_str("</div>\n");
    out.push_str("<div class=\"grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4\">\n");
    for item in team {
        push_card_form(&mut out, item, true, false, &action);
    }
    out.push_str("</div>\n</div>\n");

    // Search
    let _ = writeln!(
        out,
        "<form method=\"get\" action=\"/\" class=\"mb-6\"><div class=\"flex gap-2\">\
         <input type=\"search\" name=\"search\" value=\"{}\" placeholder=\"Search Pokémon by name or type...\" class=\"flex-1 px-4 py-2 border rounded-lg\">\
         <button type=\"submit\" class=\"px-4 py-2 bg-blue-500 text-white rounded-lg\">Search</button></div></form>",
        escape_html(&data.search_term)
    );

    // Catalog grid
    out.push_str("<div class=\"grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4\">\n");
    if data.pokemon_list.is_empty() {
        out.push_str("<p class=\"col-span-full text-center text-gray-500\">No Pokémon found.</p>\n");
    }
    for item in &data.pokemon_list {
        let in_team = team.contains(item.id);
        let disabled = !in_team && team.is_full();
        push_card_form(&mut out, item, in_team, disabled, &action);
    }
    out.push_str("</div>\n");

    push_pagination(&mut out, data);

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

/// Renders a minimal error page.
#[must_use]
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let mut out = String::new();
    push_head(&mut out, "Pokédex - Error");
    let _ = writeln!(
        out,
        "<div class=\"container mx-auto p-4 text-center\"><h1 class=\"text-3xl font-bold mb-4\">{}</h1>\
         <p class=\"mb-6\">{}</p><a href=\"/\" class=\"text-blue-600 underline\">Back to Pokédex</a></div>",
        status.as_u16(),
        escape_html(message)
    );
    out.push_str("</body>\n</html>\n");
    out
}

fn push_head(out: &mut String, title: &str) {
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(title));
    out.push_str("<script src=\"https://cdn.tailwindcss.com\"></script>\n");
    out.push_str("</head>\n<body class=\"bg-gray-50\">\n");
}

fn push_card_form(out: &mut String, item: &Item, in_team: bool, disabled: bool, action: &str) {
    // Items serialize infallibly: plain strings and numbers only.
    let payload = serde_json::to_string(item).unwrap_or_default();
    let background = if in_team {
        "bg-green-100"
    } else if disabled {
        "bg-gray-100"
    } else {
        "bg-white"
    };

    let _ = write!(
        out,
        "<form method=\"post\" action=\"{}\">\
         <input type=\"hidden\" name=\"intent\" value=\"{INTENT_TOGGLE}\">\
         <input type=\"hidden\" name=\"pokemon\" value=\"{}\">\
         <button type=\"submit\" class=\"w-full\"{}>",
        escape_html(action),
        escape_html(&payload),
        if disabled { " disabled" } else { "" }
    );
    let _ = write!(
        out,
        "<div class=\"relative rounded-lg overflow-hidden shadow-md transition-all {background}\">"
    );
    if in_team {
        out.push_str(
            "<div class=\"absolute top-2 right-2\"><span class=\"bg-green-500 text-white px-2 py-1 rounded-full text-xs\">In Team</span></div>",
        );
    }
    let name = escape_html(&item.name);
    let _ = write!(
        out,
        "<img src=\"{}\" alt=\"{name}\" class=\"w-32 h-32 mx-auto p-2\" loading=\"lazy\">\
         <div class=\"p-4\"><h3 class=\"text-lg font-semibold capitalize text-center mb-2\">{name}</h3>\
         <div class=\"flex flex-wrap gap-1 justify-center\">",
        escape_html(&item.image_ref)
    );
    for tag in &item.tags {
        let _ = write!(
            out,
            "<span class=\"px-2 py-1 rounded-full text-xs {}\">{}</span>",
            tag_color(tag),
            escape_html(tag)
        );
    }
    out.push_str("</div></div></div></button></form>\n");
}

fn push_pagination(out: &mut String, data: &LoaderData) {
    let pagination = &data.pagination;
    if pagination.total_pages <= 1 {
        return;
    }

    out.push_str("<div class=\"flex justify-center gap-2 mt-8\">\n");
    if pagination.has_prev_page {
        let _ = writeln!(
            out,
            "<a href=\"/{}\" class=\"px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition\">Previous</a>",
            escape_html(&page_query(pagination.current_page - 1, &data.search_term))
        );
    }
    let _ = writeln!(
        out,
        "<span class=\"px-4 py-2\">Page {} of {}</span>",
        pagination.current_page, pagination.total_pages
    );
    if pagination.has_next_page {
        let _ = writeln!(
            out,
            "<a href=\"/{}\" class=\"px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition\">Next</a>",
            escape_html(&page_query(pagination.current_page + 1, &data.search_term))
        );
    }
    out.push_str("</div>\n");
}
