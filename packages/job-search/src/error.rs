//! Typed errors for the job-search pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so stage failures
//! stay strongly typed until the pipeline driver folds them into the
//! serialized state.

use thiserror::Error;

/// Errors that can occur while running the pipeline.
#[derive(Debug, Error)]
pub enum JobSearchError {
    /// Web search provider failed
    #[error("search failed: {0}")]
    Search(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Site crawl provider failed
    #[error("crawl failed: {0}")]
    Crawl(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Language model call failed
    #[error("model error: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Search returned nothing to pick a domain from
    #[error("no search results for: {query}")]
    NoSearchResults { query: String },

    /// Every extraction attempt failed or was skipped
    #[error("no job postings extracted from {attempted} candidate links")]
    NoPostingsExtracted { attempted: usize },

    /// A stage ran before the stage it depends on produced a result
    #[error("missing input for stage: {stage}")]
    MissingStageInput { stage: &'static str },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, JobSearchError>;
