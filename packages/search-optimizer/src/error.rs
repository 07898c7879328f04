//! Typed errors for the parameter optimizer.

use thiserror::Error;

/// Result type alias for optimizer operations.
pub type Result<T> = std::result::Result<T, OptimizeError>;

/// Errors that can occur while optimizing or executing a search.
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The LLM call failed
    #[error("LLM error: {0}")]
    Llm(#[from] openai_client::OpenAIError),

    /// Executing the optimized search failed
    #[error("search error: {0}")]
    Search(#[from] tavily_client::TavilyError),

    /// The produced parameters violate an invariant
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },
}
