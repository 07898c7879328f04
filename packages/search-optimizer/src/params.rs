//! Structured search parameters.
//!
//! `SearchParameters` is the structured-output target for the optimizer:
//! the field doc comments become the schema descriptions the model sees,
//! so they are written as instructions about when to use each knob.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{OptimizeError, Result};

/// Search parameters produced from a natural-language instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchParameters {
    /// The search query to execute. Keep it short and keyword-focused
    /// rather than repeating the full instruction.
    pub query: String,

    /// Domains the search must be restricted to. Only set this when the
    /// instruction names specific sites; otherwise leave it empty.
    #[serde(default)]
    pub include_domains: Vec<String>,

    /// Domains to exclude from results. Only set this when the instruction
    /// asks to avoid specific sites; otherwise leave it empty.
    #[serde(default)]
    pub exclude_domains: Vec<String>,

    /// Whether image results should be included. Set only when the
    /// instruction asks for images or visual material.
    #[serde(default)]
    pub include_images: bool,

    /// Whether each image result should carry descriptive text. Requires
    /// include_images to be true.
    #[serde(default)]
    pub include_image_descriptions: bool,

    /// The search category. Use "news" for current events, "finance" for
    /// markets and company financials, and "general" for everything else.
    #[serde(default)]
    pub topic: Topic,

    /// How far back results may reach. Set only when the instruction
    /// implies recency, e.g. "this week" or "latest".
    #[serde(default)]
    pub time_range: Option<TimeRange>,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            query: String::new(),
            include_domains: Vec::new(),
            exclude_domains: Vec::new(),
            include_images: false,
            include_image_descriptions: false,
            topic: Topic::General,
            time_range: None,
        }
    }
}

impl SearchParameters {
    /// Create parameters for a plain query with all defaults.
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Enforce cross-field invariants, repairing where possible.
    ///
    /// Image descriptions without image results are meaningless, so the
    /// description flag is cleared when the image flag is unset. Applied to
    /// every model-produced value before it is returned to callers.
    pub fn normalized(mut self) -> Self {
        if !self.include_images {
            self.include_image_descriptions = false;
        }
        self
    }

    /// Check cross-field invariants without repairing them.
    pub fn validate(&self) -> Result<()> {
        if self.include_image_descriptions && !self.include_images {
            return Err(OptimizeError::InvalidParameters {
                reason: "include_image_descriptions requires include_images".to_string(),
            });
        }
        Ok(())
    }

    /// Map onto a Tavily search request.
    pub fn search_request(&self, max_results: usize) -> tavily_client::SearchRequest {
        let mut request = tavily_client::SearchRequest::new(self.query.clone())
            .max_results(max_results)
            .include_domains(self.include_domains.clone())
            .exclude_domains(self.exclude_domains.clone())
            .include_images(self.include_images, self.include_image_descriptions)
            .topic(self.topic.as_str());
        if let Some(range) = self.time_range {
            request = request.time_range(range.as_str());
        }
        request
    }
}

/// Search category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    #[default]
    General,
    News,
    Finance,
}

impl Topic {
    /// Wire value for the Tavily API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::General => "general",
            Topic::News => "news",
            Topic::Finance => "finance",
        }
    }
}

/// Recency window for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
}

impl TimeRange {
    /// Wire value for the Tavily API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        }
    }
}
