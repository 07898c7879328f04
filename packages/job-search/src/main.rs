//! CLI for the job search pipeline
//!
//! Runs the full pipeline for a company name, saves the run state as
//! JSON, and prints a summary of the postings that were found. A failed
//! run still saves whatever stages completed, with the error recorded
//! in the output.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use job_search::{JobSearchAgent, JobSearchConfig, OpenAIJobModel, PipelineState};
use openai_client::OpenAIClient;
use tavily_client::TavilyClient;

#[derive(Parser)]
#[command(name = "job-search")]
#[command(about = "Find a company's job postings from its careers site")]
struct Args {
    /// Company to search for
    company_name: String,

    /// Write the run state as JSON to this file
    #[arg(long, short, default_value = "job_search_results.json")]
    output: PathBuf,

    /// Model override (defaults to gpt-4o)
    #[arg(long)]
    model: Option<String>,

    /// Maximum pages to crawl
    #[arg(long)]
    limit: Option<usize>,

    /// Concurrent extraction calls
    #[arg(long)]
    concurrency: Option<usize>,
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

    for key in ["TAVILY_API_KEY", "OPENAI_API_KEY"] {
        if std::env::var(key).is_err() {
            eprintln!("Error: {} environment variable not set", key);
            std::process::exit(1);
        }
    }

    let mut config = JobSearchConfig::default();
    if let Some(model) = args.model {
        config = config.with_model(model);
    }
    if let Some(limit) = args.limit {
        let limits = config.crawl.clone().with_limit(limit);
        config = config.with_crawl_limits(limits);
    }
    if let Some(concurrency) = args.concurrency {
        config = config.with_concurrency(concurrency);
    }

    let tavily = TavilyClient::from_env().context("Failed to initialize search client")?;
    let model = OpenAIJobModel::new(
        OpenAIClient::from_env().context("Failed to initialize OpenAI client")?,
        config.model.clone(),
    );
    let agent = JobSearchAgent::new(tavily.clone(), tavily, model, config);

    let state = agent.run(&args.company_name).await;

    let json = serde_json::to_string_pretty(&state).context("Failed to serialize run state")?;
    std::fs::write(&args.output, &json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_summary(&state, &args.output);

    Ok(())
}

fn print_summary(state: &PipelineState, output: &PathBuf) {
    println!("Results saved to {}", output.display());

    if let Some(error) = &state.error {
        println!("Run failed: {}", error);
    }

    let jobs = state.jobs();
    println!(
        "Found {} job postings for {}",
        jobs.len(),
        state.company_name
    );
    for job in jobs {
        println!("- {} ({})", job.title, job.location);
        if !job.benefits.is_empty() {
            println!("  Benefits: {}", job.benefits.join(", "));
        }
        println!("  {}", job.url);
    }
}
