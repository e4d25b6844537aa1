//! Error types for API client and mock server operations.
//!
//! Fixture shape mismatches never show up here: they are compile errors.

use thiserror::Error;

/// Errors that can occur while calling the API or starting a mock server.
#[derive(Debug, Error)]
pub enum Error {
    /// API request returned a non-success status.
    #[error("API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Query string serialization error.
    #[error("Invalid query: {0}")]
    QueryError(#[from] serde_qs::Error),

    /// The mock server could not bind its listener.
    #[error("Failed to bind mock server: {0}")]
    BindError(#[from] std::io::Error),
}

/// Result type alias for client and mock server operations.
pub type Result<T> = core::result::Result<T, Error>;
