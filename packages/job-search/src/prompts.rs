//! LLM prompts for the job-search pipeline.
//!
//! Two calls use a model: picking the careers domain out of the search
//! hits, and turning raw page text into a structured posting.

/// Prompt for picking the careers domain from search candidates.
pub const SELECT_DOMAIN_PROMPT: &str = r#"You are helping locate the official careers site for {company}.

Candidate URLs from a web search:
{candidates}

Reply with the single URL most likely to list {company}'s open positions.
Prefer the company's own careers page over job boards, aggregators, or news
articles. Reply with the URL only, nothing else."#;

/// System prompt for structured posting extraction.
pub const EXTRACT_POSTING_SYSTEM: &str = r#"You extract structured job posting data from raw page text.
Fill every field from the page content alone. Use "Not specified" when the
location is missing and an empty list when no benefits are mentioned. Do
not invent details that are not on the page."#;

/// User prompt for structured posting extraction.
pub const EXTRACT_POSTING_PROMPT: &str = r#"Search context: {query}

Page URL: {url}

Page content:
{content}

Extract the job posting above as structured data."#;

/// Format the domain-selection prompt with numbered candidates.
pub fn format_select_domain_prompt(company: &str, candidates: &[String]) -> String {
    let candidates_text = candidates
        .iter()
        .enumerate()
        .map(|(i, url)| format!("{}. {}", i + 1, url))
        .collect::<Vec<_>>()
        .join("\n");

    SELECT_DOMAIN_PROMPT
        .replace("{company}", company)
        .replace("{candidates}", &candidates_text)
}

/// Format the extraction prompt for one page.
pub fn format_extract_posting_prompt(url: &str, content: &str, query: &str) -> String {
    EXTRACT_POSTING_PROMPT
        .replace("{query}", query)
        .replace("{url}", url)
        .replace("{content}", content)
}
