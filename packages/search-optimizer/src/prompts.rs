//! LLM prompts for parameter optimization.

use chrono::NaiveDate;

/// System prompt for translating an instruction into search parameters.
///
/// The response shape is enforced separately through the structured-output
/// schema, so the prompt focuses on when to reach for each knob.
pub const OPTIMIZE_SYSTEM_PROMPT: &str = r#"You translate a user's research instruction into parameters for a web search API.

Guidelines:
- Distill the instruction into a short, keyword-focused query.
- Restrict or exclude domains only when the instruction names sites.
- Request images only when the instruction asks for visual material,
  and image descriptions only together with images.
- Pick the "news" topic for current events, "finance" for markets and
  company financials, "general" otherwise.
- Set a time range only when the instruction implies recency. Judge
  relative phrases like "this week" against today's date: {today}."#;

/// Format the system prompt with today's date.
///
/// Relative recency phrases in instructions are meaningless without it.
pub fn format_optimize_system_prompt(today: NaiveDate) -> String {
    OPTIMIZE_SYSTEM_PROMPT.replace("{today}", &today.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_includes_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let formatted = format_optimize_system_prompt(date);

        assert!(formatted.contains("2025-03-14"));
        assert!(!formatted.contains("{today}"));
    }
}
