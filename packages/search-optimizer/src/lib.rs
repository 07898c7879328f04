//! Search parameter optimization
//!
//! Converts natural-language research instructions into structured search
//! parameters via a single structured-output LLM call, with optional
//! execution of the optimized search.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::Provider;
//! use search_optimizer::ParameterOptimizer;
//!
//! let optimizer = ParameterOptimizer::for_provider(Provider::OpenAi)?;
//!
//! let params = optimizer
//!     .optimize("Find recent news about quantum computing startups")
//!     .await?;
//!
//! assert!(params.validate().is_ok());
//! ```

pub mod error;
pub mod optimizer;
pub mod params;
pub mod prompts;

pub use error::{OptimizeError, Result};
pub use optimizer::ParameterOptimizer;
pub use params::{SearchParameters, TimeRange, Topic};
