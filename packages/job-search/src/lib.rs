//! Multi-step agent that finds a company's job postings from its careers
//! site.
//!
//! The pipeline runs three stages in order. Domain search asks the web
//! for "{company} careers" and has the model pick the company's own
//! domain from the hits. Crawl walks that domain and keeps only the
//! links that look like individual job postings. Extract turns each
//! candidate page into a structured [`JobPosting`], fetching content
//! for links the crawl did not capture.
//!
//! The three external concerns sit behind traits ([`WebSearch`],
//! [`SiteCrawler`], [`JobModel`]) so the pipeline can run against the
//! real providers or the mocks in [`testing`].
//!
//! ```rust,ignore
//! use job_search::{JobSearchAgent, JobSearchConfig, OpenAIJobModel};
//! use openai_client::OpenAIClient;
//! use tavily_client::TavilyClient;
//!
//! let tavily = TavilyClient::from_env()?;
//! let config = JobSearchConfig::default();
//! let model = OpenAIJobModel::new(OpenAIClient::from_env()?, config.model.clone());
//! let agent = JobSearchAgent::new(tavily.clone(), tavily, model, config);
//!
//! let state = agent.run("Acme").await;
//! for job in state.jobs() {
//!     println!("{} ({})", job.title, job.location);
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod state;
pub mod testing;
pub mod traits;

pub use classifier::job_link_candidates;
pub use config::{CrawlLimits, JobSearchConfig};
pub use error::{JobSearchError, Result};
pub use pipeline::{JobSearchAgent, Stage};
pub use providers::OpenAIJobModel;
pub use state::{CrawlResult, DomainSearchResult, ExtractResult, JobPosting, PipelineState};
pub use traits::{CrawledPage, JobModel, SearchHit, SiteCrawler, WebSearch};
