//! Web-layer error type and response payloads.

use crate::error::CatalogError;
use crate::web::render;
use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

/// Message shown when the catalog cannot be loaded.
pub const CATALOG_UNAVAILABLE_MESSAGE: &str = "Failed to load Pokédex";

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Always false.
    pub success: bool,
    /// Human readable message.
    pub message: String,
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Upstream catalog could not be loaded. No partial page is served.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),

    /// Request was invalid.
    #[error("{message}")]
    BadRequest {
        /// Human readable message.
        message: String,
    },

    /// Route does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// Requested path.
        path: String,
    },
}

impl WebError {
    /// Creates a bad-request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::CatalogUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Message safe to show to the user.
    ///
    /// Upstream details stay in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::CatalogUnavailable(_) => CATALOG_UNAVAILABLE_MESSAGE.to_string(),
            Self::BadRequest { message } => message.clone(),
            Self::NotFound { path } => format!("not found: {path}"),
        }
    }

    /// Renders the error as an HTML page.
    pub fn into_html(self) -> Response {
        let status = self.status();
        let body = render::render_error_page(status, &self.public_message());
        (status, Html(body)).into_response()
    }
}

impl From<FormRejection> for WebError {
    fn from(rejection: FormRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = WebError::from(CatalogError::Timeout {
            url: "http://upstream".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), CATALOG_UNAVAILABLE_MESSAGE);

        let err = WebError::bad_request("Invalid action");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Invalid action");

        let err = WebError::NotFound {
            path: "/nope".to_string(),
        };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_public_message_hides_upstream_detail() {
        let err = WebError::from(CatalogError::Network {
            url: "http://10.0.0.1/internal".to_string(),
            reason: "connection refused".to_string(),
        });
        assert!(!err.public_message().contains("10.0.0.1"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_into_response_status() {
        let response = WebError::bad_request("Invalid action").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = WebError::bad_request("x").into_html();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
