//! Provider seams for the pipeline.
//!
//! The three stages talk to the outside world through these traits, so
//! the pipeline logic can be exercised against the mocks in
//! [`crate::testing`] without network access:
//!
//! - [`WebSearch`] — ranked web search (domain-search stage)
//! - [`SiteCrawler`] — site crawl and batch content fetch (crawl and
//!   extraction stages)
//! - [`JobModel`] — the language-model calls (domain selection, posting
//!   extraction)
//!
//! ```rust,ignore
//! let agent = JobSearchAgent::new(searcher, crawler, model, config);
//! let state = agent.run("Acme").await;
//! ```

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::config::CrawlLimits;
use crate::error::Result;
use crate::state::JobPosting;

// ============================================================================
// Web search
// ============================================================================

/// A single hit returned by the search provider.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// The result URL.
    pub url: String,

    /// Page title from the search results.
    pub title: String,

    /// Provider relevance score.
    pub score: f64,
}

impl SearchHit {
    /// Create a hit with no title and a zero score.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            score: 0.0,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the relevance score.
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }
}

/// Ranked web search.
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Search the web, returning at most `max_results` hits in provider
    /// ranking order.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>>;
}

// ============================================================================
// Site crawling
// ============================================================================

/// A page discovered by a site crawl.
#[derive(Debug, Clone)]
pub struct CrawledPage {
    /// The page URL.
    pub url: String,

    /// Raw page text, when the provider extracted it.
    pub raw_content: Option<String>,
}

impl CrawledPage {
    /// Create a page with no content.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            raw_content: None,
        }
    }

    /// Attach raw page text.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.raw_content = Some(content.into());
        self
    }
}

/// Site crawl and batch content fetch.
#[async_trait]
pub trait SiteCrawler: Send + Sync {
    /// Crawl a site within the given limits, returning discovered pages.
    async fn crawl(&self, url: &str, limits: &CrawlLimits) -> Result<Vec<CrawledPage>>;

    /// Fetch page content for specific URLs in one batch.
    ///
    /// URLs the provider could not fetch are absent from the returned map.
    async fn fetch_content(&self, urls: &[String]) -> Result<IndexMap<String, String>>;
}

// ============================================================================
// Language model
// ============================================================================

/// The language-model calls the pipeline makes.
#[async_trait]
pub trait JobModel: Send + Sync {
    /// Pick the company's careers domain from candidate URLs.
    ///
    /// `candidates` is never empty; implementations fall back to the
    /// first candidate when the model's answer names none of them.
    async fn select_domain(&self, company: &str, candidates: &[String]) -> Result<String>;

    /// Extract one structured posting from page content.
    ///
    /// `query` carries the search query that started the run; `url` is
    /// the page the content came from.
    async fn extract_posting(&self, url: &str, content: &str, query: &str) -> Result<JobPosting>;
}
