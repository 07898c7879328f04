//! Testing utilities including mock implementations.
//!
//! These are useful for testing the pipeline without making real search,
//! crawl, or model calls.

use async_trait::async_trait;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::config::CrawlLimits;
use crate::error::{JobSearchError, Result};
use crate::state::JobPosting;
use crate::traits::{CrawledPage, JobModel, SearchHit, SiteCrawler, WebSearch};

/// A mock search provider for testing.
///
/// Returns canned hits per query, with an optional forced failure.
#[derive(Clone, Default)]
pub struct MockSearch {
    /// Predefined hits by query
    hits: Arc<RwLock<HashMap<String, Vec<SearchHit>>>>,

    /// Forced failure message, if set
    fail_with: Arc<RwLock<Option<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockSearchCall>>>,
}

/// Record of a call made to the mock search provider.
#[derive(Debug, Clone)]
pub enum MockSearchCall {
    Search { query: String, max_results: usize },
}

impl MockSearch {
    /// Create a new mock search provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add predefined hits for a query.
    pub fn with_hits(self, query: impl Into<String>, urls: &[&str]) -> Self {
        let hits: Vec<SearchHit> = urls
            .iter()
            .enumerate()
            .map(|(i, url)| {
                SearchHit::new(*url)
                    .with_title(format!("Result {}", i + 1))
                    .with_score(1.0 - i as f64 * 0.1)
            })
            .collect();
        self.hits.write().unwrap().insert(query.into(), hits);
        self
    }

    /// Make every search call fail with the given message.
    pub fn failing(self, message: impl Into<String>) -> Self {
        *self.fail_with.write().unwrap() = Some(message.into());
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockSearchCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl WebSearch for MockSearch {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        self.calls.write().unwrap().push(MockSearchCall::Search {
            query: query.to_string(),
            max_results,
        });

        if let Some(message) = self.fail_with.read().unwrap().as_ref() {
            return Err(JobSearchError::Search(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                message.clone(),
            ))));
        }

        let mut hits = self
            .hits
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default();
        hits.truncate(max_results);
        Ok(hits)
    }
}

/// A mock crawler for testing.
///
/// Returns predefined pages per site and serves batch content fetches
/// from a URL→content map.
#[derive(Clone, Default)]
pub struct MockCrawler {
    /// Predefined pages by crawl root URL
    sites: Arc<RwLock<HashMap<String, Vec<CrawledPage>>>>,

    /// Content served by `fetch_content`, keyed by URL
    content: Arc<RwLock<HashMap<String, String>>>,

    /// Forced crawl failure message, if set
    fail_with: Arc<RwLock<Option<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockCrawlerCall>>>,
}

/// Record of a call made to the mock crawler.
#[derive(Debug, Clone)]
pub enum MockCrawlerCall {
    Crawl { url: String, limit: usize },
    FetchContent { urls: Vec<String> },
}

impl MockCrawler {
    /// Create a new mock crawler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add predefined pages for a crawl root.
    pub fn with_site(self, root: impl Into<String>, pages: Vec<CrawledPage>) -> Self {
        self.sites.write().unwrap().insert(root.into(), pages);
        self
    }

    /// Add content served by `fetch_content`.
    pub fn with_content(self, url: impl Into<String>, content: impl Into<String>) -> Self {
        self.content
            .write()
            .unwrap()
            .insert(url.into(), content.into());
        self
    }

    /// Make every crawl call fail with the given message.
    pub fn failing(self, message: impl Into<String>) -> Self {
        *self.fail_with.write().unwrap() = Some(message.into());
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockCrawlerCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl SiteCrawler for MockCrawler {
    async fn crawl(&self, url: &str, limits: &CrawlLimits) -> Result<Vec<CrawledPage>> {
        self.calls.write().unwrap().push(MockCrawlerCall::Crawl {
            url: url.to_string(),
            limit: limits.limit,
        });

        if let Some(message) = self.fail_with.read().unwrap().as_ref() {
            return Err(JobSearchError::Crawl(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                message.clone(),
            ))));
        }

        let mut pages = self
            .sites
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_default();
        pages.truncate(limits.limit);
        Ok(pages)
    }

    async fn fetch_content(&self, urls: &[String]) -> Result<IndexMap<String, String>> {
        self.calls
            .write()
            .unwrap()
            .push(MockCrawlerCall::FetchContent {
                urls: urls.to_vec(),
            });

        // URLs with no canned content are simply absent, like a provider
        // that failed to extract them.
        let content = self.content.read().unwrap();
        Ok(urls
            .iter()
            .filter_map(|url| content.get(url).map(|c| (url.clone(), c.clone())))
            .collect())
    }
}

/// A mock model for testing.
///
/// Picks canned domains and postings, with per-URL extraction failures.
#[derive(Clone, Default)]
pub struct MockModel {
    /// Predefined domain picks by company
    domains: Arc<RwLock<HashMap<String, String>>>,

    /// Predefined postings by URL
    postings: Arc<RwLock<HashMap<String, JobPosting>>>,

    /// URLs whose extraction should fail
    fail_urls: Arc<RwLock<Vec<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockModelCall>>>,
}

/// Record of a call made to the mock model.
#[derive(Debug, Clone)]
pub enum MockModelCall {
    SelectDomain { company: String, candidate_count: usize },
    ExtractPosting { url: String, content_len: usize },
}

impl MockModel {
    /// Create a new mock model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a fixed domain for a company.
    pub fn with_domain(self, company: impl Into<String>, domain: impl Into<String>) -> Self {
        self.domains
            .write()
            .unwrap()
            .insert(company.into(), domain.into());
        self
    }

    /// Add a predefined posting for a URL.
    pub fn with_posting(self, url: impl Into<String>, posting: JobPosting) -> Self {
        self.postings.write().unwrap().insert(url.into(), posting);
        self
    }

    /// Mark a URL as failing extraction.
    pub fn fail_url(self, url: impl Into<String>) -> Self {
        self.fail_urls.write().unwrap().push(url.into());
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockModelCall> {
        self.calls.read().unwrap().clone()
    }

    /// Generate a default posting for unknown URLs.
    fn default_posting(&self, url: &str) -> JobPosting {
        JobPosting::new(format!("Role at {}", url), "Not specified", url)
    }
}

#[async_trait]
impl JobModel for MockModel {
    async fn select_domain(&self, company: &str, candidates: &[String]) -> Result<String> {
        self.calls.write().unwrap().push(MockModelCall::SelectDomain {
            company: company.to_string(),
            candidate_count: candidates.len(),
        });

        // Return the canned pick or fall back to the top candidate
        if let Some(domain) = self.domains.read().unwrap().get(company) {
            return Ok(domain.clone());
        }
        candidates.first().cloned().ok_or(JobSearchError::MissingStageInput {
            stage: "domain selection",
        })
    }

    async fn extract_posting(&self, url: &str, content: &str, _query: &str) -> Result<JobPosting> {
        self.calls.write().unwrap().push(MockModelCall::ExtractPosting {
            url: url.to_string(),
            content_len: content.len(),
        });

        if self.fail_urls.read().unwrap().contains(&url.to_string()) {
            return Err(JobSearchError::Model(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "Mock extraction failure",
            ))));
        }

        Ok(self
            .postings
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| self.default_posting(url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_search_returns_canned_hits() {
        let search = MockSearch::new().with_hits(
            "Acme careers",
            &["https://acme.com/careers", "https://jobboard.example/acme"],
        );

        let hits = search.search("Acme careers", 3).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].url, "https://acme.com/careers");
        assert!(hits[0].score > hits[1].score);
    }

    #[tokio::test]
    async fn test_mock_search_respects_max_results() {
        let search =
            MockSearch::new().with_hits("q", &["https://a.com", "https://b.com", "https://c.com"]);

        let hits = search.search("q", 2).await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_search_failure_and_tracking() {
        let search = MockSearch::new().failing("search down");

        let result = search.search("q", 3).await;
        assert!(result.is_err());
        assert_eq!(search.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_crawler_serves_site_pages() {
        let crawler = MockCrawler::new().with_site(
            "https://acme.com",
            vec![CrawledPage::new("https://acme.com/careers").with_content("We are hiring")],
        );

        let pages = crawler
            .crawl("https://acme.com", &CrawlLimits::default())
            .await
            .unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].raw_content.as_deref(), Some("We are hiring"));
    }

    #[tokio::test]
    async fn test_mock_fetch_content_skips_unknown_urls() {
        let crawler = MockCrawler::new().with_content("https://acme.com/jobs/1", "Engineer role");

        let urls = vec![
            "https://acme.com/jobs/1".to_string(),
            "https://acme.com/jobs/2".to_string(),
        ];
        let content = crawler.fetch_content(&urls).await.unwrap();
        assert_eq!(content.len(), 1);
        assert!(content.contains_key("https://acme.com/jobs/1"));
    }

    #[tokio::test]
    async fn test_mock_model_default_posting() {
        let model = MockModel::new();

        let posting = model
            .extract_posting("https://acme.com/jobs/1", "content", "Acme")
            .await
            .unwrap();
        assert_eq!(posting.url, "https://acme.com/jobs/1");
        assert_eq!(posting.location, "Not specified");
    }

    #[tokio::test]
    async fn test_mock_model_fail_url() {
        let model = MockModel::new().fail_url("https://acme.com/jobs/2");

        assert!(model
            .extract_posting("https://acme.com/jobs/2", "content", "Acme")
            .await
            .is_err());
        assert!(model
            .extract_posting("https://acme.com/jobs/1", "content", "Acme")
            .await
            .is_ok());
    }
}
