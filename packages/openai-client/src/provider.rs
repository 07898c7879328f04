//! OpenAI-compatible API providers.
//!
//! The chat completions wire format is served by several vendors. A
//! `Provider` bundles the base URL, the default model, and the environment
//! variable holding the API key, so callers can switch vendors without
//! touching request code.

use std::fmt;
use std::str::FromStr;

use crate::error::OpenAIError;

/// An OpenAI-compatible API vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// api.openai.com
    OpenAi,
    /// api.groq.com, OpenAI-compatible endpoint
    Groq,
}

impl Provider {
    /// Base URL for the provider's chat completions API.
    pub fn base_url(&self) -> &'static str {
        match self {
            Provider::OpenAi => "https://api.openai.com/v1",
            Provider::Groq => "https://api.groq.com/openai/v1",
        }
    }

    /// Default model for the provider.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-4o",
            Provider::Groq => "gemma2-9b-it",
        }
    }

    /// Environment variable holding the provider's API key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Groq => "GROQ_API_KEY",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::OpenAi => f.write_str("openai"),
            Provider::Groq => f.write_str("groq"),
        }
    }
}

impl FromStr for Provider {
    type Err = OpenAIError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "groq" => Ok(Provider::Groq),
            other => Err(OpenAIError::Config(format!(
                "unknown provider '{}', expected 'openai' or 'groq'",
                other
            ))),
        }
    }
}
