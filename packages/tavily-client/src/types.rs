//! Tavily API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Search
// =============================================================================

/// Web search request (`POST /search`).
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// Search query
    pub query: String,

    /// Search depth: "basic" or "advanced"
    pub search_depth: String,

    /// Maximum number of results to return
    pub max_results: usize,

    /// Restrict results to these domains
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_domains: Vec<String>,

    /// Exclude results from these domains
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_domains: Vec<String>,

    /// Include image results
    pub include_images: bool,

    /// Include descriptions alongside image results
    pub include_image_descriptions: bool,

    /// Search category: "general", "news" or "finance"
    pub topic: String,

    /// Limit results to a recency window: "day", "week", "month" or "year"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<String>,
}

impl SearchRequest {
    /// Create a new search request with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_depth: "basic".to_string(),
            max_results: 5,
            include_domains: Vec::new(),
            exclude_domains: Vec::new(),
            include_images: false,
            include_image_descriptions: false,
            topic: "general".to_string(),
            time_range: None,
        }
    }

    /// Set the search depth ("basic" or "advanced").
    pub fn search_depth(mut self, depth: impl Into<String>) -> Self {
        self.search_depth = depth.into();
        self
    }

    /// Set the maximum number of results.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Restrict results to the given domains.
    pub fn include_domains(mut self, domains: Vec<String>) -> Self {
        self.include_domains = domains;
        self
    }

    /// Exclude results from the given domains.
    pub fn exclude_domains(mut self, domains: Vec<String>) -> Self {
        self.exclude_domains = domains;
        self
    }

    /// Include image results, optionally with descriptions.
    pub fn include_images(mut self, images: bool, descriptions: bool) -> Self {
        self.include_images = images;
        self.include_image_descriptions = descriptions;
        self
    }

    /// Set the search category ("general", "news" or "finance").
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Limit results to a recency window ("day", "week", "month" or "year").
    pub fn time_range(mut self, range: impl Into<String>) -> Self {
        self.time_range = Some(range.into());
        self
    }
}

/// Web search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// The query that was executed
    pub query: String,

    /// Ranked search results
    pub results: Vec<SearchHit>,

    /// Synthesized answer, when the API provides one
    #[serde(default)]
    pub answer: Option<String>,

    /// Image results, present when requested
    #[serde(default)]
    pub images: Vec<SearchImage>,

    /// Server-side processing time in seconds
    #[serde(default)]
    pub response_time: Option<f64>,
}

/// A single search result.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    /// Result URL
    pub url: String,

    /// Page title
    pub title: String,

    /// Relevant content snippet
    pub content: String,

    /// Relevance score (0.0 to 1.0)
    pub score: f64,

    /// Full page content, present at advanced search depth
    #[serde(default)]
    pub raw_content: Option<String>,

    /// Publication date, present for news results
    #[serde(default)]
    pub published_date: Option<String>,
}

/// An image result.
///
/// The API returns bare URLs, or objects when descriptions are requested.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SearchImage {
    Url(String),
    Described { url: String, description: String },
}

impl SearchImage {
    /// The image URL regardless of variant.
    pub fn url(&self) -> &str {
        match self {
            SearchImage::Url(url) => url,
            SearchImage::Described { url, .. } => url,
        }
    }
}

// =============================================================================
// Crawl
// =============================================================================

/// Site crawl request (`POST /crawl`).
#[derive(Debug, Clone, Serialize)]
pub struct CrawlRequest {
    /// Root URL to crawl from
    pub url: String,

    /// Maximum number of pages to return
    pub limit: usize,

    /// Maximum link depth from the root
    pub max_depth: usize,

    /// Maximum links followed per page
    pub max_breadth: usize,

    /// Extraction depth for page content: "basic" or "advanced"
    pub extract_depth: String,
}

impl CrawlRequest {
    /// Create a new crawl request for the given root URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            limit: 50,
            max_depth: 1,
            max_breadth: 20,
            extract_depth: "basic".to_string(),
        }
    }

    /// Set the maximum number of pages.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the maximum link depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum links followed per page.
    pub fn max_breadth(mut self, max_breadth: usize) -> Self {
        self.max_breadth = max_breadth;
        self
    }

    /// Set the extraction depth ("basic" or "advanced").
    pub fn extract_depth(mut self, depth: impl Into<String>) -> Self {
        self.extract_depth = depth.into();
        self
    }
}

/// Site crawl response.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlResponse {
    /// Normalized root URL the crawl started from
    #[serde(default)]
    pub base_url: Option<String>,

    /// Crawled pages; empty when the crawl found nothing
    #[serde(default)]
    pub data: Vec<CrawledPage>,
}

/// A single crawled page.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawledPage {
    /// Page URL
    pub url: String,

    /// Extracted page content, when extraction succeeded
    #[serde(default)]
    pub raw_content: Option<String>,
}

// =============================================================================
// Extract
// =============================================================================

/// Content extraction request (`POST /extract`).
#[derive(Debug, Clone, Serialize)]
pub struct ExtractRequest {
    /// URLs to extract content from
    pub urls: Vec<String>,

    /// Extraction depth: "basic" or "advanced"
    pub extract_depth: String,
}

impl ExtractRequest {
    /// Create a new extract request for the given URLs.
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            extract_depth: "basic".to_string(),
        }
    }

    /// Set the extraction depth ("basic" or "advanced").
    pub fn extract_depth(mut self, depth: impl Into<String>) -> Self {
        self.extract_depth = depth.into();
        self
    }
}

/// Content extraction response.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractResponse {
    /// Successfully extracted pages
    pub results: Vec<ExtractedPage>,

    /// URLs the API could not extract
    #[serde(default)]
    pub failed_results: Vec<FailedExtraction>,
}

/// A successfully extracted page.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedPage {
    /// Page URL
    pub url: String,

    /// Extracted page content
    pub raw_content: String,
}

/// A URL the API failed to extract.
#[derive(Debug, Clone, Deserialize)]
pub struct FailedExtraction {
    /// Page URL
    pub url: String,

    /// Failure reason, when the API provides one
    #[serde(default)]
    pub error: Option<String>,
}
