//! Configuration for the job-search pipeline.

use serde::{Deserialize, Serialize};

/// Limits passed to the crawl provider for a single site crawl.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlLimits {
    /// Maximum number of pages to return
    pub limit: usize,

    /// Maximum link depth from the starting URL (1 = starting page plus
    /// directly linked pages)
    pub max_depth: usize,

    /// Maximum links followed per page
    pub max_breadth: usize,

    /// Content extraction depth ("basic" or "advanced")
    pub extract_depth: String,
}

impl Default for CrawlLimits {
    fn default() -> Self {
        Self {
            limit: 30,
            max_depth: 1,
            max_breadth: 100,
            extract_depth: "advanced".to_string(),
        }
    }
}

impl CrawlLimits {
    /// Create limits with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of pages.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the maximum crawl depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the maximum links followed per page.
    pub fn with_max_breadth(mut self, breadth: usize) -> Self {
        self.max_breadth = breadth;
        self
    }
}

/// Configuration for a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSearchConfig {
    /// Chat model used for domain selection and posting extraction.
    ///
    /// Default: "gpt-4o".
    pub model: String,

    /// Search hits considered when picking the careers domain.
    ///
    /// Default: 3.
    pub max_search_results: usize,

    /// Limits for the careers-site crawl.
    pub crawl: CrawlLimits,

    /// Extraction calls issued concurrently (1 = sequential).
    ///
    /// Default: 4.
    pub concurrency: usize,

    /// Page content budget per extraction prompt, in bytes.
    ///
    /// Content is cut at a character boundary, so the prompt may carry
    /// slightly less than this. Default: 4000.
    pub max_content_bytes: usize,
}

impl Default for JobSearchConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            max_search_results: 3,
            crawl: CrawlLimits::default(),
            concurrency: 4,
            max_content_bytes: 4000,
        }
    }
}

impl JobSearchConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set how many search hits to consider for domain selection.
    pub fn with_max_search_results(mut self, max: usize) -> Self {
        self.max_search_results = max;
        self
    }

    /// Set the crawl limits.
    pub fn with_crawl_limits(mut self, limits: CrawlLimits) -> Self {
        self.crawl = limits;
        self
    }

    /// Set the extraction concurrency.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Set the per-prompt content budget in bytes.
    pub fn with_max_content_bytes(mut self, bytes: usize) -> Self {
        self.max_content_bytes = bytes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JobSearchConfig::default();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.max_search_results, 3);
        assert_eq!(config.crawl.limit, 30);
        assert_eq!(config.crawl.max_depth, 1);
        assert_eq!(config.crawl.max_breadth, 100);
        assert_eq!(config.crawl.extract_depth, "advanced");
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.max_content_bytes, 4000);
    }

    #[test]
    fn test_builders() {
        let config = JobSearchConfig::new()
            .with_model("gpt-4o-mini")
            .with_max_search_results(5)
            .with_crawl_limits(CrawlLimits::new().with_limit(10).with_max_depth(2))
            .with_concurrency(8);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_search_results, 5);
        assert_eq!(config.crawl.limit, 10);
        assert_eq!(config.crawl.max_depth, 2);
        assert_eq!(config.concurrency, 8);
    }

    #[test]
    fn test_concurrency_floor_is_one() {
        let config = JobSearchConfig::new().with_concurrency(0);
        assert_eq!(config.concurrency, 1);
    }
}
