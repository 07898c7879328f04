//! Integration tests for the job search pipeline.
//!
//! These tests run the full agent loop against mocks:
//! 1. Domain search picks the company's careers site
//! 2. Crawl keeps the links that look like job postings
//! 3. Extract turns each candidate page into a posting
//!
//! Failure tests check that the first stage error ends the run, is
//! recorded as a string, and leaves earlier results in place.

use job_search::testing::{MockCrawler, MockCrawlerCall, MockModel, MockSearch};
use job_search::{CrawledPage, JobPosting, JobSearchAgent, JobSearchConfig};

const CAREERS: &str = "https://acme.com/careers";

/// Helper to build a search mock with hits for "Acme careers".
fn acme_search() -> MockSearch {
    MockSearch::new().with_hits(
        "Acme careers",
        &[
            CAREERS,
            "https://jobboard.example.com/companies/acme",
            "https://acme.com",
        ],
    )
}

/// Helper to build a crawler with two job pages and an about page.
fn acme_crawler() -> MockCrawler {
    MockCrawler::new().with_site(
        CAREERS,
        vec![
            CrawledPage::new("https://acme.com/careers/senior-engineer")
                .with_content("Senior Engineer. Remote. Health insurance and 401k."),
            CrawledPage::new("https://acme.com/jobs/48151623")
                .with_content("Product Designer. Minneapolis, MN."),
            CrawledPage::new("https://acme.com/about").with_content("About Acme."),
        ],
    )
}

/// Helper to build a model that picks the careers site and extracts
/// canned postings.
fn acme_model() -> MockModel {
    MockModel::new()
        .with_domain("Acme", CAREERS)
        .with_posting(
            "https://acme.com/careers/senior-engineer",
            JobPosting::new("Senior Engineer", "Remote", "https://placeholder.invalid")
                .with_benefits(["Health insurance", "401k"]),
        )
        .with_posting(
            "https://acme.com/jobs/48151623",
            JobPosting::new("Product Designer", "Minneapolis, MN", "https://placeholder.invalid"),
        )
}

#[tokio::test]
async fn test_full_pipeline_happy_path() {
    let search = acme_search();
    let crawler = acme_crawler();
    let model = acme_model();

    let agent = JobSearchAgent::new(
        search.clone(),
        crawler.clone(),
        model.clone(),
        JobSearchConfig::default(),
    );
    let state = agent.run("Acme").await;

    assert!(state.error.is_none());

    let domain_search = state.domain_search.as_ref().unwrap();
    assert_eq!(domain_search.query, "Acme careers");
    assert_eq!(domain_search.top_urls.len(), 3);
    assert_eq!(domain_search.selected_domain, CAREERS);

    // The about page is not a job link; the two job pages are.
    let crawl = state.crawl.as_ref().unwrap();
    assert_eq!(
        crawl.links,
        vec![
            "https://acme.com/careers/senior-engineer".to_string(),
            "https://acme.com/jobs/48151623".to_string(),
        ]
    );

    let jobs = state.jobs();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].title, "Senior Engineer");
    assert_eq!(jobs[0].benefits, vec!["Health insurance", "401k"]);
    assert_eq!(jobs[1].title, "Product Designer");

    // Each posting carries the page it came from, not whatever URL the
    // model put in the record.
    assert_eq!(jobs[0].url, "https://acme.com/careers/senior-engineer");
    assert_eq!(jobs[1].url, "https://acme.com/jobs/48151623");

    // Both candidates had crawl content, so nothing was fetched.
    assert!(!crawler
        .calls()
        .iter()
        .any(|c| matches!(c, MockCrawlerCall::FetchContent { .. })));
}

#[tokio::test]
async fn test_search_failure_ends_the_run_before_crawl() {
    let search = MockSearch::new().failing("connection reset");
    let crawler = acme_crawler();
    let model = acme_model();

    let agent = JobSearchAgent::new(
        search.clone(),
        crawler.clone(),
        model.clone(),
        JobSearchConfig::default(),
    );
    let state = agent.run("Acme").await;

    assert_eq!(state.error.as_deref(), Some("search failed: connection reset"));
    assert!(state.domain_search.is_none());
    assert!(state.crawl.is_none());
    assert!(state.extract.is_none());

    // Later stages never ran.
    assert!(crawler.calls().is_empty());
    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn test_no_search_results_is_an_error() {
    let search = MockSearch::new();
    let model = acme_model();

    let agent = JobSearchAgent::new(
        search,
        acme_crawler(),
        model.clone(),
        JobSearchConfig::default(),
    );
    let state = agent.run("Acme").await;

    assert_eq!(
        state.error.as_deref(),
        Some("no search results for: Acme careers")
    );
    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn test_crawl_failure_keeps_domain_search_result() {
    let search = acme_search();
    let crawler = MockCrawler::new().failing("timed out");
    let model = acme_model();

    let agent = JobSearchAgent::new(search, crawler, model, JobSearchConfig::default());
    let state = agent.run("Acme").await;

    assert_eq!(state.error.as_deref(), Some("crawl failed: timed out"));

    // The completed stage survives in the saved state.
    let domain_search = state.domain_search.as_ref().unwrap();
    assert_eq!(domain_search.selected_domain, CAREERS);
    assert!(state.crawl.is_none());
    assert!(state.extract.is_none());
    assert!(state.jobs().is_empty());
}

#[tokio::test]
async fn test_fallback_to_domain_when_no_job_links() {
    // The crawl finds nothing that looks like a posting, so the pipeline
    // falls back to extracting from the selected domain itself.
    let search = acme_search();
    let crawler = MockCrawler::new()
        .with_site(
            CAREERS,
            vec![CrawledPage::new("https://acme.com/about").with_content("About Acme.")],
        )
        .with_content(CAREERS, "Open roles: Senior Engineer, Remote.");
    let model = MockModel::new().with_domain("Acme", CAREERS).with_posting(
        CAREERS,
        JobPosting::new("Senior Engineer", "Remote", "https://placeholder.invalid"),
    );

    let agent = JobSearchAgent::new(
        search,
        crawler.clone(),
        model,
        JobSearchConfig::default(),
    );
    let state = agent.run("Acme").await;

    assert!(state.error.is_none());
    assert_eq!(state.crawl.as_ref().unwrap().links, vec![CAREERS.to_string()]);

    // The domain page had no crawl content, so it was fetched.
    assert!(crawler.calls().iter().any(|c| matches!(
        c,
        MockCrawlerCall::FetchContent { urls } if urls == &vec![CAREERS.to_string()]
    )));

    let jobs = state.jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Senior Engineer");
    assert_eq!(jobs[0].url, CAREERS);
}

#[tokio::test]
async fn test_failed_extraction_is_dropped_not_fatal() {
    let search = acme_search();
    let crawler = acme_crawler();
    let model = acme_model().fail_url("https://acme.com/jobs/48151623");

    let agent = JobSearchAgent::new(search, crawler, model, JobSearchConfig::default());
    let state = agent.run("Acme").await;

    assert!(state.error.is_none());
    let jobs = state.jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Senior Engineer");
}

#[tokio::test]
async fn test_zero_extractions_recorded_as_error() {
    let search = acme_search();
    let crawler = MockCrawler::new().with_site(
        CAREERS,
        vec![CrawledPage::new("https://acme.com/jobs/48151623")
            .with_content("Product Designer.")],
    );
    let model = MockModel::new()
        .with_domain("Acme", CAREERS)
        .fail_url("https://acme.com/jobs/48151623");

    let agent = JobSearchAgent::new(search, crawler, model, JobSearchConfig::default());
    let state = agent.run("Acme").await;

    assert_eq!(
        state.error.as_deref(),
        Some("no job postings extracted from 1 candidate links")
    );

    // Earlier stages still serialize with the failed run.
    assert!(state.domain_search.is_some());
    assert!(state.crawl.is_some());
    assert!(state.extract.is_none());
}

#[tokio::test]
async fn test_state_serializes_without_raw_content() {
    let agent = JobSearchAgent::new(
        acme_search(),
        acme_crawler(),
        acme_model(),
        JobSearchConfig::default(),
    );
    let state = agent.run("Acme").await;

    let json = serde_json::to_string_pretty(&state).unwrap();
    assert!(json.contains("\"company_name\": \"Acme\""));
    assert!(json.contains("\"selected_domain\""));
    assert!(json.contains("Senior Engineer"));
    assert!(!json.contains("raw_content"));
    assert!(!json.contains("error"));
}
