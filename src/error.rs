//! Error types for Pokédex operations.
//!
//! This module provides the error hierarchy using `thiserror` for the
//! catalog fetch, the HTTP server, configuration, and CLI commands. The
//! roster itself has no error states: a rejected toggle is an outcome,
//! not an error.

use thiserror::Error;

/// Result type alias for Pokédex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// HTTP server errors (bind, serve).
    #[error("server error: {0}")]
    Server(#[from] ServerError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

impl Error {
    /// Creates a configuration error from a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Catalog fetch errors.
///
/// Every variant is a "remote unavailable" failure: the caller gets no
/// partial result and decides how to surface it.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Connection or transport failure.
    #[error("network error fetching {url}: {reason}")]
    Network {
        /// URL that was being fetched.
        url: String,
        /// Underlying transport error.
        reason: String,
    },

    /// Request did not complete within the configured timeout.
    #[error("timed out fetching {url}")]
    Timeout {
        /// URL that was being fetched.
        url: String,
    },

    /// Upstream answered with a non-success status.
    #[error("upstream returned {status} for {url}")]
    Status {
        /// URL that was being fetched.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Response body could not be decoded.
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse {
        /// URL (or file path) the body came from.
        url: String,
        /// Decode failure.
        reason: String,
    },
}

impl CatalogError {
    /// Classifies a `reqwest` failure for the given URL.
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error, url: &str) -> Self {
        let url = url.to_string();
        if err.is_timeout() {
            Self::Timeout { url }
        } else if err.is_decode() {
            Self::MalformedResponse {
                url,
                reason: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::Status {
                url,
                status: status.as_u16(),
            }
        } else {
            Self::Network {
                url,
                reason: err.to_string(),
            }
        }
    }

    /// Returns the URL the failure relates to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. }
            | Self::Timeout { url }
            | Self::Status { url, .. }
            | Self::MalformedResponse { url, .. } => url,
        }
    }
}

/// HTTP server errors.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Listener could not be bound.
    #[error("failed to bind {addr}: {reason}")]
    Bind {
        /// Address that was requested.
        addr: String,
        /// Reason for failure.
        reason: String,
    },

    /// Server loop terminated with an error.
    #[error("server failed: {0}")]
    Serve(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Command(CommandError::ExecutionFailed(err.to_string()))
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}
