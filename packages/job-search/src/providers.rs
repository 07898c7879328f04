//! Provider implementations of the pipeline seams.
//!
//! `TavilyClient` backs both [`WebSearch`] and [`SiteCrawler`];
//! [`OpenAIJobModel`] pairs an OpenAI-compatible client with the model
//! name the run is configured for.

use async_trait::async_trait;
use indexmap::IndexMap;
use openai_client::{ChatRequest, Message, OpenAIClient};
use tavily_client::{CrawlRequest, ExtractRequest, SearchRequest, TavilyClient};
use tracing::warn;

use crate::config::CrawlLimits;
use crate::error::{JobSearchError, Result};
use crate::prompts;
use crate::state::JobPosting;
use crate::traits::{CrawledPage, JobModel, SearchHit, SiteCrawler, WebSearch};

#[async_trait]
impl WebSearch for TavilyClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        let request = SearchRequest::new(query)
            .search_depth("advanced")
            .max_results(max_results);

        let response = TavilyClient::search(self, request)
            .await
            .map_err(|e| JobSearchError::Search(Box::new(e)))?;

        Ok(response
            .results
            .into_iter()
            .map(|hit| {
                SearchHit::new(hit.url)
                    .with_title(hit.title)
                    .with_score(hit.score)
            })
            .collect())
    }
}

#[async_trait]
impl SiteCrawler for TavilyClient {
    async fn crawl(&self, url: &str, limits: &CrawlLimits) -> Result<Vec<CrawledPage>> {
        let request = CrawlRequest::new(url)
            .limit(limits.limit)
            .max_depth(limits.max_depth)
            .max_breadth(limits.max_breadth)
            .extract_depth(limits.extract_depth.as_str());

        let response = TavilyClient::crawl(self, request)
            .await
            .map_err(|e| JobSearchError::Crawl(Box::new(e)))?;

        Ok(response
            .data
            .into_iter()
            .map(|page| CrawledPage {
                url: page.url,
                raw_content: page.raw_content,
            })
            .collect())
    }

    async fn fetch_content(&self, urls: &[String]) -> Result<IndexMap<String, String>> {
        if urls.is_empty() {
            return Ok(IndexMap::new());
        }

        let request = ExtractRequest::new(urls.to_vec()).extract_depth("advanced");
        let response = TavilyClient::extract(self, request)
            .await
            .map_err(|e| JobSearchError::Crawl(Box::new(e)))?;

        Ok(response
            .results
            .into_iter()
            .map(|page| (page.url, page.raw_content))
            .collect())
    }
}

/// An OpenAI-compatible chat model bound to a model name.
pub struct OpenAIJobModel {
    client: OpenAIClient,
    model: String,
}

impl OpenAIJobModel {
    /// Bind a client to the model the pipeline should use.
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// The model name calls are made with.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl JobModel for OpenAIJobModel {
    async fn select_domain(&self, company: &str, candidates: &[String]) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(Message::user(prompts::format_select_domain_prompt(
                company, candidates,
            )))
            .temperature(0.0);

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(|e| JobSearchError::Model(Box::new(e)))?;

        // The reply should repeat one of the candidates; scan for it in
        // ranking order so ties go to the better hit.
        let reply = response.content;
        for candidate in candidates {
            if reply.contains(candidate.trim_end_matches('/')) {
                return Ok(candidate.clone());
            }
        }

        warn!(company, reply = %reply, "Model reply named no candidate, using the top hit");
        candidates.first().cloned().ok_or(JobSearchError::MissingStageInput {
            stage: "domain selection",
        })
    }

    async fn extract_posting(&self, url: &str, content: &str, query: &str) -> Result<JobPosting> {
        let user_prompt = prompts::format_extract_posting_prompt(url, content, query);

        self.client
            .extract::<JobPosting>(&self.model, prompts::EXTRACT_POSTING_SYSTEM, user_prompt)
            .await
            .map_err(|e| JobSearchError::Model(Box::new(e)))
    }
}
