//! Type-safe structured output example

use openai_client::OpenAIClient;
use schemars::JsonSchema;
use serde::Deserialize;

/// A job posting extracted from free text.
#[derive(Debug, Deserialize, JsonSchema)]
struct Posting {
    /// Job title
    title: String,
    /// Work location
    location: String,
    /// Listed benefits
    benefits: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = OpenAIClient::from_env()?;

    let system = "Extract the job posting from the page text.";
    let user = "Senior Backend Engineer - Berlin or remote. We offer 30 days \
                of vacation, a learning budget, and equity.";

    // Schema is generated from the Posting type automatically
    let posting: Posting = client.extract::<Posting>("gpt-4o", system, user).await?;

    println!("Title:    {}", posting.title);
    println!("Location: {}", posting.location);
    println!("Benefits: {}", posting.benefits.join(", "));

    Ok(())
}
