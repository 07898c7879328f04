//! Pure Tavily REST API client
//!
//! A clean, minimal client for the Tavily API with no domain-specific logic.
//! Supports web search, site crawling, and page content extraction.
//!
//! # Example
//!
//! ```rust,ignore
//! use tavily_client::{TavilyClient, SearchRequest, CrawlRequest};
//!
//! let client = TavilyClient::from_env()?;
//!
//! // Web search
//! let response = client
//!     .search(SearchRequest::new("acme corp careers").max_results(3))
//!     .await?;
//!
//! // Site crawl
//! let pages = client
//!     .crawl(CrawlRequest::new("https://acme.com").limit(30))
//!     .await?;
//! ```

pub mod credentials;
pub mod error;
pub mod types;

pub use credentials::SecretString;
pub use error::{Result, TavilyError};
pub use types::*;

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Timeout applied to every API request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Pure Tavily API client.
#[derive(Clone)]
pub struct TavilyClient {
    http_client: Client,
    api_key: SecretString,
    base_url: String,
}

impl TavilyClient {
    /// Create a new Tavily client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: SecretString::new(api_key),
            base_url: "https://api.tavily.com".to_string(),
        }
    }

    /// Create from environment variable `TAVILY_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("TAVILY_API_KEY")
            .map_err(|_| TavilyError::Config("TAVILY_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Web search.
    ///
    /// Returns ranked results for the query, optionally scoped by domain,
    /// topic, and recency.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/search", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Tavily search request failed");
                TavilyError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Tavily search API error");
            return Err(TavilyError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let search_response: SearchResponse = response
            .json()
            .await
            .map_err(|e| TavilyError::Parse(e.to_string()))?;

        debug!(
            query = %search_response.query,
            results = search_response.results.len(),
            duration_ms = start.elapsed().as_millis(),
            "Tavily search"
        );

        Ok(search_response)
    }

    /// Site crawl.
    ///
    /// Discovers pages under the root URL and returns their extracted content.
    pub async fn crawl(&self, request: CrawlRequest) -> Result<CrawlResponse> {
        let start = std::time::Instant::now();
        let root_url = request.url.clone();

        let response = self
            .http_client
            .post(format!("{}/crawl", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, url = %root_url, "Tavily crawl request failed");
                TavilyError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Tavily crawl API error");
            return Err(TavilyError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let crawl_response: CrawlResponse = response
            .json()
            .await
            .map_err(|e| TavilyError::Parse(e.to_string()))?;

        debug!(
            url = %root_url,
            pages = crawl_response.data.len(),
            duration_ms = start.elapsed().as_millis(),
            "Tavily crawl"
        );

        Ok(crawl_response)
    }

    /// Content extraction.
    ///
    /// Fetches and extracts the content of specific URLs in one batch call.
    pub async fn extract(&self, request: ExtractRequest) -> Result<ExtractResponse> {
        let response = self
            .http_client
            .post(format!("{}/extract", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Tavily extract request failed");
                TavilyError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Tavily extract API error");
            return Err(TavilyError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let extract_response: ExtractResponse = response
            .json()
            .await
            .map_err(|e| TavilyError::Parse(e.to_string()))?;

        if !extract_response.failed_results.is_empty() {
            warn!(
                failed = extract_response.failed_results.len(),
                "Tavily extract skipped some URLs"
            );
        }

        Ok(extract_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = TavilyClient::new("tvly-test").with_base_url("https://custom.api.com");

        assert_eq!(client.api_key.expose(), "tvly-test");
        assert_eq!(client.base_url, "https://custom.api.com");
    }

    // Note: These tests require a real Tavily API key
    // They are marked as ignored by default

    #[tokio::test]
    #[ignore]
    async fn test_tavily_search() {
        let client = TavilyClient::from_env().unwrap();

        let response = client
            .search(SearchRequest::new("example domain").max_results(3))
            .await
            .unwrap();

        assert!(!response.results.is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn test_tavily_crawl() {
        let client = TavilyClient::from_env().unwrap();

        let response = client
            .crawl(CrawlRequest::new("https://example.com").limit(5))
            .await
            .unwrap();

        assert!(!response.data.is_empty());
    }
}
