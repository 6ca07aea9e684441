use serde::Serialize;

use crate::search::{SearchOutcome, SearchResultItem};

/// Base URL of the human-facing results page.
const SEARCH_PAGE_BASE: &str = "https://www.google.com/search";

/// Per-keyword ranking report. `ranking` and `ranked_url` are either both set
/// or both absent; `search_result_page` is present for every outcome variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingResult {
    pub keyword: String,
    pub ranking: Option<u32>,
    pub ranked_url: Option<String>,
    pub search_result_page: String,
}

/// Canonical results-page URL for a keyword. Synthesized independently of the
/// search outcome so it stays well-formed even when the lookup failed.
pub fn search_result_page_url(keyword: &str, country: &str) -> String {
    format!(
        "{SEARCH_PAGE_BASE}?q={}&gl={}",
        urlencoding::encode(keyword),
        urlencoding::encode(&country.to_lowercase()),
    )
}

/// Maps one search outcome to a ranking report. Pure: same inputs, same output,
/// no side effects.
///
/// Without a target URL the best match is the rank-1 item. With one, the report
/// carries the matching item's own rank and link, or neither when the target
/// does not appear in the results.
pub fn extract_ranking(
    keyword: &str,
    country: &str,
    target_url: Option<&str>,
    outcome: &SearchOutcome,
) -> RankingResult {
    let (ranking, ranked_url) = match outcome {
        SearchOutcome::Results { items, .. } => best_match(items, target_url),
        SearchOutcome::Empty
        | SearchOutcome::ConfigurationError(_)
        | SearchOutcome::ProviderError { .. }
        | SearchOutcome::ExecutionError(_) => (None, None),
    };

    RankingResult {
        keyword: keyword.to_string(),
        ranking,
        ranked_url,
        search_result_page: search_result_page_url(keyword, country),
    }
}

fn best_match(
    items: &[SearchResultItem],
    target_url: Option<&str>,
) -> (Option<u32>, Option<String>) {
    let found = match target_url {
        None => items.first(),
        Some(target) => {
            let target = normalize_link(target);
            items.iter().find(|item| normalize_link(&item.link) == target)
        }
    };

    match found {
        Some(item) => (Some(item.rank as u32), Some(item.link.clone())),
        None => (None, None),
    }
}

/// Providers are inconsistent about trailing slashes; nothing else is normalized.
fn normalize_link(link: &str) -> &str {
    link.strip_suffix('/').unwrap_or(link)
}
