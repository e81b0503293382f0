//! Request handlers.
//!
//! `load` and `apply_action` hold the request logic; the axum handlers
//! around them only pick the response shape (HTML page or JSON).

use crate::core::browse::{normalize_term, parse_page};
use crate::core::{Item, Pagination, Roster, ToggleOutcome, browse};
use crate::web::error::WebError;
use crate::web::render::{self, PageView};
use crate::web::state::AppState;
use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, OriginalUri, RawQuery, State};
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Intent that adds or removes one item.
pub const INTENT_TOGGLE: &str = "togglePokemon";

/// Intent that empties the team.
pub const INTENT_CLEAR: &str = "clearTeam";

/// Catalog query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseQuery {
    /// Search term matched against names and types.
    pub search: Option<String>,
    /// 1-based page, kept as text so junk values fall back to page 1.
    pub page: Option<String>,
}

impl BrowseQuery {
    /// Parses a raw query string.
    ///
    /// Never fails: unknown keys are ignored and a repeated key keeps its
    /// first value.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let mut query = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            let slot = match key.as_ref() {
                "search" => &mut query.search,
                "page" => &mut query.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        query
    }
}

/// Everything needed to render one catalog page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderData {
    /// Items on the requested page.
    pub pokemon_list: Vec<Item>,
    /// Current team.
    pub user_team: Roster,
    /// Pagination metadata.
    pub pagination: Pagination,
    /// Normalized search term.
    pub search_term: String,
}

/// Submitted team form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionForm {
    /// `togglePokemon` or `clearTeam`.
    pub intent: Option<String>,
    /// JSON-encoded item for `togglePokemon`.
    pub pokemon: Option<String>,
}

/// Result of a team form.
#[derive(Debug, Clone, Serialize)]
pub struct ActionData {
    /// False only when a toggle was rejected.
    pub success: bool,
    /// Toggle outcome; absent for `clearTeam`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ToggleOutcome>,
    /// Team after the action.
    pub team: Roster,
    /// Message for the user.
    pub message: String,
}

/// Fetches the catalog and builds the requested page.
///
/// # Errors
///
/// Returns [`WebError::CatalogUnavailable`] if the catalog fetch fails.
pub async fn load(state: &AppState, query: &BrowseQuery) -> Result<LoaderData, WebError> {
    let search_term = normalize_term(query.search.as_deref());
    let page = parse_page(query.page.as_deref());

    let catalog = state.catalog.fetch_catalog().await.map_err(|err| {
        tracing::error!(error = %err, url = err.url(), "failed to load catalog");
        WebError::from(err)
    })?;
    let user_team = state.rosters.get_roster(state.identity());
    let result = browse(&catalog, &search_term, page, state.settings.page_size);

    Ok(LoaderData {
        pokemon_list: result.items,
        user_team,
        pagination: result.pagination,
        search_term,
    })
}

/// Applies a team form to the store.
///
/// # Errors
///
/// Returns [`WebError::BadRequest`] for an unknown intent or a missing or
/// unparsable item payload.
pub fn apply_action(state: &AppState, form: &ActionForm) -> Result<ActionData, WebError> {
    let identity = state.identity();

    match form.intent.as_deref() {
        Some(INTENT_TOGGLE) => {
            let item = parse_item(form.pokemon.as_deref())?;
            let name = item.name.clone();
            let outcome = state.rosters.toggle_item(identity, item);
            tracing::info!(identity, pokemon = %name, ?outcome, "team toggled");

            Ok(ActionData {
                success: outcome.is_success(),
                outcome: Some(outcome),
                team: state.rosters.get_roster(identity),
                message: toggle_message(&name, outcome),
            })
        }
        Some(INTENT_CLEAR) => {
            state.rosters.clear_roster(identity);
            tracing::info!(identity, "team cleared");

            Ok(ActionData {
                success: true,
                outcome: None,
                team: Roster::default(),
                message: "Team cleared".to_string(),
            })
        }
        other => {
            tracing::warn!(intent = ?other, "rejected team action");
            Err(WebError::bad_request("Invalid action"))
        }
    }
}

fn parse_item(raw: Option<&str>) -> Result<Item, WebError> {
    raw.and_then(|json| serde_json::from_str(json).ok())
        .ok_or_else(|| WebError::bad_request("Invalid pokemon payload"))
}

/// User-facing message for a toggle.
#[must_use]
pub fn toggle_message(name: &str, outcome: ToggleOutcome) -> String {
    match outcome {
        ToggleOutcome::Added => format!("{name} added to team"),
        ToggleOutcome::Removed => format!("{name} removed from team"),
        ToggleOutcome::Rejected => format!("{name} could not be added (team full)"),
    }
}

/// `GET /`
pub async fn index(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Response {
    render_index(&state, &BrowseQuery::parse(raw.as_deref()), None).await
}

/// `POST /`
pub async fn index_action(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
    form: Result<Form<ActionForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => return WebError::from(rejection).into_html(),
    };
    let query = BrowseQuery::parse(raw.as_deref());
    match apply_action(&state, &form) {
        Ok(action) => render_index(&state, &query, Some(&action.message)).await,
        Err(err) => err.into_html(),
    }
}

async fn render_index(state: &AppState, query: &BrowseQuery, message: Option<&str>) -> Response {
    match load(state, query).await {
        Ok(data) => Html(render::render_page(&PageView {
            data: &data,
            message,
        }))
        .into_response(),
        Err(err) => err.into_html(),
    }
}

/// `GET /api/pokedex`
pub async fn api_pokedex(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<LoaderData>, WebError> {
    load(&state, &BrowseQuery::parse(raw.as_deref())).await.map(Json)
}

/// `POST /api/team`
pub async fn api_team(
    State(state): State<AppState>,
    form: Result<Form<ActionForm>, FormRejection>,
) -> Result<Json<ActionData>, WebError> {
    let Form(form) = form?;
    apply_action(&state, &form).map(Json)
}

/// `GET /healthz`
pub async fn healthz() -> &'static str {
    "ok"
}

/// Fallback for unknown routes.
pub async fn not_found(uri: OriginalUri) -> WebError {
    WebError::NotFound {
        path: uri.0.path().to_string(),
    }
}
