//! Instruction-to-parameters optimization.
//!
//! One structured-output LLM call turns a free-text instruction into
//! `SearchParameters`. The heavy lifting happens in the schema: the model
//! fills in a strict JSON shape generated from the parameter type.

use chrono::Utc;
use tavily_client::{SearchResponse, TavilyClient};
use tracing::{debug, info};

use openai_client::{OpenAIClient, Provider};

use crate::error::Result;
use crate::params::SearchParameters;
use crate::prompts;

/// Turns natural-language instructions into structured search parameters.
pub struct ParameterOptimizer {
    client: OpenAIClient,
    model: String,
}

impl ParameterOptimizer {
    /// Create an optimizer backed by the given client and model.
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Create an optimizer for a provider, using its default model.
    ///
    /// Reads the provider's API key environment variable.
    pub fn for_provider(provider: Provider) -> Result<Self> {
        let client = OpenAIClient::for_provider(provider)?;
        Ok(Self::new(client, provider.default_model()))
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Convert an instruction into search parameters.
    ///
    /// The result is normalized before it is returned, so the image-flag
    /// invariant always holds on the output.
    pub async fn optimize(&self, instruction: &str) -> Result<SearchParameters> {
        let system = prompts::format_optimize_system_prompt(Utc::now().date_naive());

        debug!(model = %self.model, "Optimizing search instruction");

        let params: SearchParameters = self
            .client
            .extract(&self.model, system, instruction)
            .await?;
        let params = params.normalized();

        info!(query = %params.query, topic = params.topic.as_str(), "Optimized parameters");

        Ok(params)
    }

    /// Convert an instruction into parameters and execute the search.
    pub async fn optimize_and_search(
        &self,
        instruction: &str,
        tavily: &TavilyClient,
        max_results: usize,
    ) -> Result<(SearchParameters, SearchResponse)> {
        let params = self.optimize(instruction).await?;
        let response = tavily.search(params.search_request(max_results)).await?;

        info!(
            query = %params.query,
            results = response.results.len(),
            "Executed optimized search"
        );

        Ok((params, response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: These tests require a real OpenAI API key
    // They are marked as ignored by default

    #[tokio::test]
    #[ignore]
    async fn test_optimize_real_instruction() {
        let optimizer = ParameterOptimizer::for_provider(Provider::OpenAi).unwrap();

        let params = optimizer
            .optimize("Find news about Rust language releases from this month")
            .await
            .unwrap();

        assert!(!params.query.is_empty());
        assert!(params.validate().is_ok());
    }
}
