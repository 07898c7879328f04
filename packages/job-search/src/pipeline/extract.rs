//! Extraction stage: one model call per candidate link.

use futures::future::join_all;
use indexmap::IndexMap;
use openai_client::truncate_to_char_boundary;
use tracing::{info, warn};

use crate::config::JobSearchConfig;
use crate::error::{JobSearchError, Result};
use crate::state::{CrawlResult, DomainSearchResult, ExtractResult, JobPosting};
use crate::traits::{JobModel, SiteCrawler};

/// Turn candidate links into structured postings.
///
/// Links missing crawl content get one batch fetch; links that still have
/// nothing are skipped. Extraction fans out `config.concurrency` calls at
/// a time and drops individual failures, so one bad page never sinks the
/// stage. Only a run with zero successful extractions is an error.
pub async fn extract(
    search: &DomainSearchResult,
    crawl: &CrawlResult,
    crawler: &impl SiteCrawler,
    model: &impl JobModel,
    config: &JobSearchConfig,
) -> Result<ExtractResult> {
    // Fill in content the crawl did not carry, one batch call.
    let missing: Vec<String> = crawl
        .links
        .iter()
        .filter(|link| !crawl.raw_content.contains_key(*link))
        .cloned()
        .collect();

    let fetched = if missing.is_empty() {
        IndexMap::new()
    } else {
        match crawler.fetch_content(&missing).await {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    error = %e,
                    urls = missing.len(),
                    "Content fetch failed, extracting from crawl content only"
                );
                IndexMap::new()
            }
        }
    };

    let mut targets: Vec<(&str, &str)> = Vec::new();
    for link in &crawl.links {
        match crawl.raw_content.get(link).or_else(|| fetched.get(link)) {
            Some(content) => targets.push((link.as_str(), content.as_str())),
            None => warn!(url = %link, "No content available, skipping"),
        }
    }

    info!(
        links = crawl.links.len(),
        with_content = targets.len(),
        concurrency = config.concurrency,
        "Extracting job postings"
    );

    let query = search.query.as_str();
    let mut jobs: Vec<JobPosting> = Vec::new();
    for chunk in targets.chunks(config.concurrency.max(1)) {
        let futures: Vec<_> = chunk
            .iter()
            .copied()
            .map(|(link, content)| async move {
                (link, extract_one(model, link, content, query, config).await)
            })
            .collect();

        for (link, result) in join_all(futures).await {
            match result {
                Ok(job) => jobs.push(job),
                Err(e) => {
                    warn!(url = %link, error = %e, "Failed to extract job posting, skipping")
                }
            }
        }
    }

    if jobs.is_empty() {
        return Err(JobSearchError::NoPostingsExtracted {
            attempted: crawl.links.len(),
        });
    }

    info!(jobs = jobs.len(), "Extraction complete");
    Ok(ExtractResult { jobs })
}

/// One extraction call: budget the content, then trust the source link
/// over whatever URL the model filled in.
async fn extract_one(
    model: &impl JobModel,
    link: &str,
    content: &str,
    query: &str,
    config: &JobSearchConfig,
) -> Result<JobPosting> {
    let content = truncate_to_char_boundary(content, config.max_content_bytes);
    let mut job = model.extract_posting(link, content, query).await?;
    job.url = link.to_string();
    Ok(job)
}
