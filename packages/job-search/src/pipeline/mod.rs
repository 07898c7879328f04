//! The pipeline driver.
//!
//! A fixed-order stage machine: domain search, then crawl, then extract.
//! The first stage error is folded into the state as a string and ends
//! the run; later stages never execute. The stages that already completed
//! keep their results, so a failed run still serializes with whatever
//! partial progress was made.

mod crawl;
mod domain_search;
mod extract;

pub use crawl::crawl;
pub use domain_search::domain_search;
pub use extract::extract;

use tracing::warn;

use crate::config::JobSearchConfig;
use crate::error::{JobSearchError, Result};
use crate::state::PipelineState;
use crate::traits::{JobModel, SiteCrawler, WebSearch};

/// Stages of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DomainSearch,
    Crawl,
    Extract,
    Done,
    Failed,
}

impl Stage {
    /// The stage that follows on success.
    pub fn next(self) -> Stage {
        match self {
            Stage::DomainSearch => Stage::Crawl,
            Stage::Crawl => Stage::Extract,
            Stage::Extract => Stage::Done,
            Stage::Done => Stage::Done,
            Stage::Failed => Stage::Failed,
        }
    }

    /// Whether the run is over.
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Failed)
    }
}

/// The assembled pipeline: the three provider seams plus configuration.
///
/// ```rust,ignore
/// let agent = JobSearchAgent::new(tavily.clone(), tavily, model, config);
/// let state = agent.run("Acme").await;
/// println!("{} postings", state.jobs().len());
/// ```
pub struct JobSearchAgent<S, C, M> {
    searcher: S,
    crawler: C,
    model: M,
    config: JobSearchConfig,
}

impl<S: WebSearch, C: SiteCrawler, M: JobModel> JobSearchAgent<S, C, M> {
    /// Assemble an agent from its three seams.
    pub fn new(searcher: S, crawler: C, model: M, config: JobSearchConfig) -> Self {
        Self {
            searcher,
            crawler,
            model,
            config,
        }
    }

    /// The configuration the agent runs with.
    pub fn config(&self) -> &JobSearchConfig {
        &self.config
    }

    /// Run the full pipeline for a company.
    ///
    /// Never returns `Err`: a stage failure is recorded in the returned
    /// state's `error` field and ends the run early.
    pub async fn run(&self, company: &str) -> PipelineState {
        let mut state = PipelineState::new(company);
        let mut stage = Stage::DomainSearch;

        while !stage.is_terminal() {
            stage = match self.run_stage(stage, &mut state).await {
                Ok(()) => stage.next(),
                Err(e) => {
                    warn!(stage = ?stage, error = %e, "Pipeline stage failed");
                    state.error = Some(e.to_string());
                    Stage::Failed
                }
            };
        }

        state
    }

    /// Execute one stage against the accumulated state.
    async fn run_stage(&self, stage: Stage, state: &mut PipelineState) -> Result<()> {
        match stage {
            Stage::DomainSearch => {
                let result = domain_search(
                    &state.company_name,
                    &self.searcher,
                    &self.model,
                    &self.config,
                )
                .await?;
                state.domain_search = Some(result);
            }
            Stage::Crawl => {
                let search = state
                    .domain_search
                    .as_ref()
                    .ok_or(JobSearchError::MissingStageInput { stage: "crawl" })?;
                let result = crawl(search, &self.crawler, &self.config).await?;
                state.crawl = Some(result);
            }
            Stage::Extract => {
                let search = state
                    .domain_search
                    .as_ref()
                    .ok_or(JobSearchError::MissingStageInput { stage: "extract" })?;
                let crawled = state
                    .crawl
                    .as_ref()
                    .ok_or(JobSearchError::MissingStageInput { stage: "extract" })?;
                let result = extract(
                    search,
                    crawled,
                    &self.crawler,
                    &self.model,
                    &self.config,
                )
                .await?;
                state.extract = Some(result);
            }
            Stage::Done | Stage::Failed => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        assert_eq!(Stage::DomainSearch.next(), Stage::Crawl);
        assert_eq!(Stage::Crawl.next(), Stage::Extract);
        assert_eq!(Stage::Extract.next(), Stage::Done);
    }

    #[test]
    fn test_terminal_stages_stay_put() {
        assert_eq!(Stage::Done.next(), Stage::Done);
        assert_eq!(Stage::Failed.next(), Stage::Failed);
        assert!(Stage::Done.is_terminal());
        assert!(Stage::Failed.is_terminal());
        assert!(!Stage::Crawl.is_terminal());
    }
}
