//! Pipeline state and stage result types.
//!
//! `PipelineState` is the record the CLI serializes: one entry per stage,
//! filled in as the pipeline advances, plus an error string when a stage
//! fails. Everything here lives for a single run and is discarded after
//! the result is written.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Result of the domain-search stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainSearchResult {
    /// The query sent to the search provider
    pub query: String,

    /// Candidate URLs, in provider ranking order
    pub top_urls: Vec<String>,

    /// The URL the model picked as the careers domain
    pub selected_domain: String,
}

/// Result of the crawl stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlResult {
    /// The domain that was crawled
    pub domain: String,

    /// Links classified as job-posting candidates
    pub links: Vec<String>,

    /// Raw page text for retained links, keyed by URL.
    ///
    /// Carried between stages but left out of the serialized result;
    /// the links list and domain are what the output records.
    #[serde(skip_serializing, default)]
    pub raw_content: IndexMap<String, String>,
}

/// A single structured job posting.
///
/// This is the structured-output target for the extraction model, so the
/// field docs double as the schema descriptions it sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JobPosting {
    /// The job title
    pub title: String,

    /// The work location for the role, or "Not specified"
    pub location: String,

    /// The URL of the job posting
    pub url: String,

    /// Benefits listed in the posting
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl JobPosting {
    /// Create a posting with no benefits listed.
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            url: url.into(),
            benefits: vec![],
        }
    }

    /// Set the benefits list.
    pub fn with_benefits(mut self, benefits: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.benefits = benefits.into_iter().map(|b| b.into()).collect();
        self
    }
}

/// Result of the extraction stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Successfully extracted postings, in candidate-link order
    pub jobs: Vec<JobPosting>,
}

/// Accumulated state for one pipeline run.
///
/// Stage results are `None` until their stage completes. Once `error` is
/// set, downstream stages are skipped, so a failed run keeps whatever
/// partial results preceded the failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineState {
    /// The company the run is searching for
    pub company_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_search: Option<DomainSearchResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl: Option<CrawlResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract: Option<ExtractResult>,

    /// Error from the first failed stage, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PipelineState {
    /// Create an empty state for a company.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            domain_search: None,
            crawl: None,
            extract: None,
            error: None,
        }
    }

    /// The extracted postings, or empty if extraction never ran.
    pub fn jobs(&self) -> &[JobPosting] {
        self.extract.as_ref().map(|e| e.jobs.as_slice()).unwrap_or_default()
    }

    /// Whether a stage recorded an error.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_content_is_not_serialized() {
        let mut raw_content = IndexMap::new();
        raw_content.insert(
            "https://acme.com/careers".to_string(),
            "We are hiring".to_string(),
        );
        let result = CrawlResult {
            domain: "https://acme.com".to_string(),
            links: vec!["https://acme.com/careers".to_string()],
            raw_content,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("links"));
        assert!(!json.contains("raw_content"));
        assert!(!json.contains("We are hiring"));
    }

    #[test]
    fn test_crawl_result_deserializes_without_raw_content() {
        let json = r#"{"domain": "https://acme.com", "links": []}"#;
        let result: CrawlResult = serde_json::from_str(json).unwrap();
        assert!(result.raw_content.is_empty());
    }

    #[test]
    fn test_empty_state_serializes_compactly() {
        let state = PipelineState::new("Acme");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"company_name":"Acme"}"#);
    }

    #[test]
    fn test_jobs_accessor() {
        let mut state = PipelineState::new("Acme");
        assert!(state.jobs().is_empty());

        state.extract = Some(ExtractResult {
            jobs: vec![JobPosting::new(
                "Engineer",
                "Remote",
                "https://acme.com/jobs/1",
            )],
        });
        assert_eq!(state.jobs().len(), 1);
        assert_eq!(state.jobs()[0].title, "Engineer");
    }

    #[test]
    fn test_posting_benefits_default_on_deserialize() {
        let json = r#"{"title": "Engineer", "location": "Remote", "url": "https://acme.com/jobs/1"}"#;
        let posting: JobPosting = serde_json::from_str(json).unwrap();
        assert!(posting.benefits.is_empty());
    }

    #[test]
    fn test_posting_schema_has_descriptions() {
        let schema = schemars::schema_for!(JobPosting);
        let json = serde_json::to_value(&schema).unwrap();
        let properties = json["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 4);
        assert!(properties["title"]["description"]
            .as_str()
            .unwrap()
            .contains("title"));
    }
}
