//! Job-posting link classification.
//!
//! Pure URL heuristics, no network and no model: a crawled link is a
//! job-posting candidate when it stays on the crawled site and its path
//! carries a careers keyword or a posting id, or when it points at a
//! known third-party recruiting platform. When nothing survives, the
//! selected domain itself becomes the sole candidate so the extraction
//! stage still has something to work with.

use regex::Regex;
use url::Url;

/// Path substrings that mark a careers or posting page.
const PATH_KEYWORDS: &[&str] = &[
    "careers",
    "career",
    "jobs",
    "job",
    "position",
    "opening",
    "vacancy",
    "apply",
    "employment",
    "join-us",
    "hiring",
];

/// Host substrings of hosted recruiting platforms.
const PLATFORM_HOSTS: &[&str] = &[
    "greenhouse.io",
    "lever.co",
    "workday",
    "breezy.hr",
    "jobvite",
    "smartrecruiters",
    "bamboohr",
    "workable",
    "ashbyhq",
    "icims",
];

/// Filter crawled links down to job-posting candidates.
///
/// Input order is preserved for the links that survive. If none do, the
/// result is exactly `[selected_domain]`.
pub fn job_link_candidates(links: &[String], selected_domain: &str) -> Vec<String> {
    let root = host_of(selected_domain).map(|host| root_domain(&host).to_string());

    let survivors: Vec<String> = links
        .iter()
        .filter(|link| is_job_link(link, root.as_deref()))
        .cloned()
        .collect();

    if survivors.is_empty() {
        vec![selected_domain.to_string()]
    } else {
        survivors
    }
}

/// Classify one link against the root domain of the crawled site.
fn is_job_link(link: &str, root: Option<&str>) -> bool {
    // Bare in-page references only survive when the fragment itself
    // carries a posting id.
    if let Some(fragment) = link.strip_prefix('#') {
        return is_job_id(fragment);
    }

    let Ok(url) = Url::parse(link) else {
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();

    // Hosted recruiting platforms count wherever they live.
    if PLATFORM_HOSTS.iter().any(|p| host.contains(p)) {
        return true;
    }

    // Everything else must stay on the crawled site.
    let same_site = match root {
        Some(root) => host == root || host.ends_with(&format!(".{}", root)),
        None => false,
    };
    if !same_site {
        return false;
    }

    let path = url.path().to_ascii_lowercase();
    if PATH_KEYWORDS.iter().any(|kw| path.contains(kw)) {
        return true;
    }
    if path.split('/').any(is_job_id) {
        return true;
    }

    // Same-site anchor links still count when the fragment is an id.
    url.fragment().map(is_job_id).unwrap_or(false)
}

/// Extract the registrable part of a host: its last two labels.
fn root_domain(host: &str) -> &str {
    let mut dots = host.rmatch_indices('.').map(|(i, _)| i);
    dots.next();
    match dots.next() {
        Some(i) => &host[i + 1..],
        None => host,
    }
}

/// Lowercased host of a URL or bare domain string.
fn host_of(url_or_domain: &str) -> Option<String> {
    let parsed = Url::parse(url_or_domain)
        .or_else(|_| Url::parse(&format!("https://{}", url_or_domain)))
        .ok()?;
    parsed.host_str().map(|h| h.to_ascii_lowercase())
}

/// Whether a path segment or fragment looks like a posting id:
/// a UUID, or a numeric slug such as `4835722-senior-engineer`.
fn is_job_id(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    let segment = segment.to_ascii_lowercase();
    let uuid =
        Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap();
    let numeric_slug = Regex::new(r"^\d{5,}(-[a-z0-9-]+)?$").unwrap();
    uuid.is_match(&segment) || numeric_slug.is_match(&segment)
}
