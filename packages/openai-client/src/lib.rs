//! Pure OpenAI-compatible REST API client
//!
//! A clean, minimal client for the chat completions API with no
//! domain-specific logic. Supports plain chat completions and type-safe
//! structured outputs, against OpenAI itself or any OpenAI-compatible
//! vendor (Groq).
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{OpenAIClient, ChatRequest, Message};
//!
//! let client = OpenAIClient::from_env()?;
//!
//! let response = client.chat_completion(ChatRequest {
//!     model: "gpt-4o".into(),
//!     messages: vec![Message::user("Hello!")],
//!     ..Default::default()
//! }).await?;
//! ```
//!
//! # Type-Safe Structured Output
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Posting {
//!     title: String,
//!     location: String,
//! }
//!
//! // Schema generated automatically from the type
//! let posting: Posting = client
//!     .extract::<Posting>("gpt-4o", system_prompt, user_prompt)
//!     .await?;
//! ```
//!
//! # Alternate Providers
//!
//! ```rust,ignore
//! use openai_client::{OpenAIClient, Provider};
//!
//! // Reads GROQ_API_KEY and targets api.groq.com
//! let client = OpenAIClient::for_provider(Provider::Groq)?;
//! ```

pub mod error;
pub mod provider;
pub mod schema;
pub mod types;

pub use error::{OpenAIError, Result};
pub use provider::Provider;
pub use schema::StructuredOutput;
pub use types::*;

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Timeout applied to every API request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Pure OpenAI-compatible API client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new client with the given API key, targeting OpenAI.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: Provider::OpenAi.base_url().to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::for_provider(Provider::OpenAi)
    }

    /// Create a client for an OpenAI-compatible provider.
    ///
    /// Reads the provider's API key environment variable and targets its
    /// base URL.
    pub fn for_provider(provider: Provider) -> Result<Self> {
        let api_key = std::env::var(provider.api_key_env())
            .map_err(|_| OpenAIError::Config(format!("{} not set", provider.api_key_env())))?;
        Ok(Self::new(api_key).with_base_url(provider.base_url()))
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Type-safe structured output extraction.
    ///
    /// Automatically generates a JSON schema from the type `T` using
    /// `schemars`, sends it as a strict `json_schema` response format, and
    /// deserializes the response.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use schemars::JsonSchema;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize, JsonSchema)]
    /// struct Posting {
    ///     title: String,
    ///     location: String,
    ///     benefits: Vec<String>,
    /// }
    ///
    /// let posting: Posting = client
    ///     .extract::<Posting>("gpt-4o", system_prompt, user_prompt)
    ///     .await?;
    /// ```
    pub async fn extract<T: StructuredOutput>(
        &self,
        model: &str,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Result<T> {
        let schema = T::openai_schema();

        debug!(
            type_name = T::type_name(),
            schema = %serde_json::to_string_pretty(&schema).unwrap_or_default(),
            "Generated schema for extraction"
        );

        let request = StructuredRequest::new(model, system_prompt, user_prompt, schema);
        let json_str = self.structured_output(request).await?;

        // Some compatible vendors fence the JSON despite strict mode
        serde_json::from_str(strip_code_blocks(&json_str))
            .map_err(|e| OpenAIError::Parse(format!("Failed to deserialize response: {}", e)))
    }

    /// Chat completion.
    ///
    /// Send messages to the chat completion API and get a response.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Chat completion request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Chat completion API error");
            return Err(OpenAIError::Api(format!("API error: {}", error_text)));
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| OpenAIError::Api("No response choices returned".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: chat_response.usage,
        })
    }

    /// Structured output with JSON schema.
    ///
    /// Uses the `json_schema` response format for guaranteed valid JSON.
    pub async fn structured_output(&self, request: StructuredRequest) -> Result<String> {
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| OpenAIError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Structured output API error");
            return Err(OpenAIError::Api(format!(
                "Structured output error: {}",
                error_text
            )));
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| OpenAIError::Api("No response choices returned".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = OpenAIClient::new("sk-test").with_base_url("https://custom.api.com");

        assert_eq!(client.api_key, "sk-test");
        assert_eq!(client.base_url, "https://custom.api.com");
    }

    #[test]
    fn test_new_defaults_to_openai() {
        let client = OpenAIClient::new("sk-test");
        assert_eq!(client.base_url, "https://api.openai.com/v1");
    }
}
