//! Crawl stage: crawl the selected domain and classify its links.

use indexmap::IndexMap;
use tracing::info;

use crate::classifier::job_link_candidates;
use crate::config::JobSearchConfig;
use crate::error::Result;
use crate::state::{CrawlResult, DomainSearchResult};
use crate::traits::SiteCrawler;

/// Crawl the careers domain and keep the links that look like postings.
///
/// The classifier's fallback applies here: when nothing on the site looks
/// like a posting, the selected domain itself becomes the one candidate.
pub async fn crawl(
    search: &DomainSearchResult,
    crawler: &impl SiteCrawler,
    config: &JobSearchConfig,
) -> Result<CrawlResult> {
    let domain = &search.selected_domain;
    info!(domain = %domain, limit = config.crawl.limit, "Crawling selected domain");

    let pages = crawler.crawl(domain, &config.crawl).await?;

    let page_urls: Vec<String> = pages.iter().map(|page| page.url.clone()).collect();
    let links = job_link_candidates(&page_urls, domain);

    // Carry content forward only for links that survived classification.
    let mut raw_content = IndexMap::new();
    for page in pages {
        if !links.contains(&page.url) {
            continue;
        }
        if let Some(content) = page.raw_content {
            raw_content.insert(page.url, content);
        }
    }

    info!(
        pages = page_urls.len(),
        candidates = links.len(),
        with_content = raw_content.len(),
        "Classified crawled links"
    );

    Ok(CrawlResult {
        domain: domain.clone(),
        links,
        raw_content,
    })
}
