//! Router setup and the server loop.

use crate::config::AppConfig;
use crate::error::{Result, ServerError};
use crate::web::handlers;
use crate::web::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Creates the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::index_action))
        .route("/api/pokedex", get(handlers::api_pokedex))
        .route("/api/team", post(handlers::api_team))
        .route("/healthz", get(handlers::healthz))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `config.bind` and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server loop fails.
pub async fn serve(config: &AppConfig, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|e| ServerError::Bind {
            addr: config.bind.to_string(),
            reason: e.to_string(),
        })?;
    serve_on(listener, state).await
}

/// Serves on an already-bound listener until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the server loop fails.
pub async fn serve_on(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Serve(e.to_string()))?;
    tracing::info!(%addr, identity = state.identity(), "pokedex listening");

    let rosters = Arc::clone(&state.rosters);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))?;

    let stats = rosters.stats();
    tracing::info!(
        identities = stats.identity_count,
        items = stats.item_count,
        "pokedex stopped"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::core::Item;
    use crate::storage::MemoryRosterStore;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let catalog = StaticCatalog::new(vec![Item::new(25, "pikachu", "", ["electric"])]);
        router(AppState::new(
            Arc::new(catalog),
            Arc::new(MemoryRosterStore::new()),
        ))
    }

    #[tokio::test]
    async fn test_healthz() {
        let response = app()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_index_renders() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("pikachu"));
        assert!(html.contains("Your Team (0/6)"));
    }

    #[tokio::test]
    async fn test_bind_failure_reports_address() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = AppConfig {
            bind: taken.local_addr().unwrap(),
            ..AppConfig::default()
        };
        let state = AppState::new(
            Arc::new(StaticCatalog::default()),
            Arc::new(MemoryRosterStore::new()),
        );
        let err = serve(&config, state).await.unwrap_err();
        assert!(err.to_string().contains("failed to bind"));
    }
}
