//! Error types for catalog operations
//!
//! The executor keeps transport failures, non-success statuses, and
//! decode failures distinct. Tools collapse all of them into their fixed
//! user-visible sentences; the distinction exists for logging and for
//! future callers that need it.

use thiserror::Error;

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while talking to the Backstage catalog API
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The request never produced a response (connect failure, timeout,
    /// malformed response stream)
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-success status
    #[error("catalog responded with status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not valid JSON
    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL does not parse
    #[error("invalid catalog base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// Required configuration is missing
    #[error("{message}")]
    Configuration {
        /// Description of what is missing or malformed
        message: String,
    },

    /// Other error with custom message
    #[error("{message}")]
    Other {
        /// Custom error message
        message: String,
    },
}
