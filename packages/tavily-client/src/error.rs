//! Error types for the Tavily client.

use thiserror::Error;

/// Result type for Tavily client operations.
pub type Result<T> = std::result::Result<T, TavilyError>;

/// Tavily client errors.
#[derive(Debug, Error)]
pub enum TavilyError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, rate limit, invalid request)
    #[error("Tavily API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
