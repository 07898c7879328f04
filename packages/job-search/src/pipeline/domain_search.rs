//! Domain-search stage: find candidate sites, let the model pick one.

use tracing::info;

use crate::config::JobSearchConfig;
use crate::error::{JobSearchError, Result};
use crate::state::DomainSearchResult;
use crate::traits::{JobModel, WebSearch};

/// Search the web for the company's careers site and pick one domain.
pub async fn domain_search(
    company: &str,
    searcher: &impl WebSearch,
    model: &impl JobModel,
    config: &JobSearchConfig,
) -> Result<DomainSearchResult> {
    let query = format!("{} careers", company);
    info!(company, query = %query, "Searching for careers domain");

    let hits = searcher.search(&query, config.max_search_results).await?;
    if hits.is_empty() {
        return Err(JobSearchError::NoSearchResults { query });
    }

    let top_urls: Vec<String> = hits.into_iter().map(|hit| hit.url).collect();
    let selected_domain = model.select_domain(company, &top_urls).await?;
    info!(domain = %selected_domain, "Selected careers domain");

    Ok(DomainSearchResult {
        query,
        top_urls,
        selected_domain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockModel, MockSearch};

    #[tokio::test]
    async fn test_domain_search_happy_path() {
        let searcher = MockSearch::new().with_hits(
            "Acme careers",
            &[
                "https://jobboard.example/acme",
                "https://acme.com/careers",
                "https://news.example/acme-hiring",
            ],
        );
        let model = MockModel::new().with_domain("Acme", "https://acme.com/careers");

        let result = domain_search(
            "Acme",
            &searcher,
            &model,
            &JobSearchConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(result.query, "Acme careers");
        assert_eq!(result.top_urls.len(), 3);
        assert_eq!(result.top_urls[0], "https://jobboard.example/acme");
        assert_eq!(result.selected_domain, "https://acme.com/careers");
    }

    #[tokio::test]
    async fn test_domain_search_respects_result_limit() {
        let searcher = MockSearch::new().with_hits(
            "Acme careers",
            &[
                "https://a.example",
                "https://b.example",
                "https://c.example",
                "https://d.example",
            ],
        );
        let model = MockModel::new();
        let config = JobSearchConfig::default().with_max_search_results(2);

        let result = domain_search("Acme", &searcher, &model, &config)
            .await
            .unwrap();

        assert_eq!(result.top_urls.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_search_results_is_an_error() {
        let searcher = MockSearch::new();
        let model = MockModel::new();

        let error = domain_search("Nowhere Inc", &searcher, &model, &JobSearchConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(error, JobSearchError::NoSearchResults { .. }));
        assert!(error.to_string().contains("Nowhere Inc careers"));
        // The model is never consulted without candidates.
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_model_fallback_picks_top_hit() {
        // No canned domain for the company: the mock falls back to the
        // first candidate, like the real model impl does.
        let searcher = MockSearch::new()
            .with_hits("Acme careers", &["https://acme.com", "https://other.example"]);
        let model = MockModel::new();

        let result = domain_search("Acme", &searcher, &model, &JobSearchConfig::default())
            .await
            .unwrap();

        assert_eq!(result.selected_domain, "https://acme.com");
    }
}
