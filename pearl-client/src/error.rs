//! Client error types

use thiserror::Error;

/// Client error type
///
/// Standard API calls never surface this: they normalize every fault
/// into an [`shared::ApiResult`]. It is returned where the contract is
/// a typed failure instead - construction, and the export path.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Export request rejected by the server
    #[error("Export failed: {0}")]
    Export(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
