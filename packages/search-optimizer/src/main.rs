//! CLI for the search parameter optimizer
//!
//! Converts a natural-language instruction into structured search
//! parameters, optionally executes the search, and prints the result as
//! JSON (or writes it to a file).

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use openai_client::Provider;
use search_optimizer::{ParameterOptimizer, SearchParameters};
use tavily_client::TavilyClient;

#[derive(Parser)]
#[command(name = "search-optimizer")]
#[command(about = "Turn a natural-language instruction into search API parameters")]
struct Args {
    /// Natural-language search instruction
    instruction: String,

    /// LLM provider: "openai" or "groq"
    #[arg(long, default_value = "openai")]
    provider: String,

    /// Model override (defaults to the provider's default model)
    #[arg(long)]
    model: Option<String>,

    /// Execute the optimized search as well (requires TAVILY_API_KEY)
    #[arg(long)]
    execute: bool,

    /// Maximum results when executing the search
    #[arg(long, default_value_t = 5)]
    max_results: usize,

    /// Write JSON output to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

// ============================================================================
// JSON Output Types
// ============================================================================

#[derive(Serialize)]
struct OptimizeOutput {
    parameters: SearchParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<Vec<ResultInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    answer: Option<String>,
}

#[derive(Serialize)]
struct ResultInfo {
    url: String,
    title: String,
    score: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let provider: Provider = args
        .provider
        .parse()
        .context("Failed to parse --provider")?;

    let mut optimizer =
        ParameterOptimizer::for_provider(provider).context("Failed to initialize optimizer")?;
    if let Some(model) = &args.model {
        optimizer = optimizer.with_model(model);
    }

    let output = if args.execute {
        let tavily = TavilyClient::from_env().context("Failed to initialize search client")?;
        let (parameters, response) = optimizer
            .optimize_and_search(&args.instruction, &tavily, args.max_results)
            .await
            .context("Failed to optimize and execute search")?;

        let results = response
            .results
            .into_iter()
            .map(|r| ResultInfo {
                url: r.url,
                title: r.title,
                score: r.score,
            })
            .collect();

        OptimizeOutput {
            parameters,
            results: Some(results),
            answer: response.answer,
        }
    } else {
        let parameters = optimizer
            .optimize(&args.instruction)
            .await
            .context("Failed to optimize instruction")?;

        OptimizeOutput {
            parameters,
            results: None,
            answer: None,
        }
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
