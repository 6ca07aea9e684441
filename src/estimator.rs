use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashSet;

use crate::search::SearchOutcome;

/// Hard cap on suggestions per analysis run, enforced by the caller no matter
/// what an implementation returns.
pub const MAX_SUGGESTIONS: usize = 6;

/// Literal used for any metric field that cannot be estimated.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Competition {
    High,
    Medium,
    Low,
    #[serde(rename = "N/A")]
    NA,
}

/// A suggested additional keyword with estimated competitive metrics. Every
/// field is populated; unknowns carry the literal `"N/A"`, never empty holes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedKeywordMetric {
    pub related_keyword: String,
    pub competition: Competition,
    pub search_volume: String,
    pub last_30_days_searches: String,
    pub last_24_hours_searches: String,
}

impl RelatedKeywordMetric {
    /// Fully populated row with every volume metric marked unavailable.
    pub fn unavailable(related_keyword: impl Into<String>, competition: Competition) -> Self {
        Self {
            related_keyword: related_keyword.into(),
            competition,
            search_volume: NOT_AVAILABLE.to_string(),
            last_30_days_searches: NOT_AVAILABLE.to_string(),
            last_24_hours_searches: NOT_AVAILABLE.to_string(),
        }
    }
}

/// The one model-dependent capability left in the system. Implementations may
/// call out to anything (an LLM, a keyword-planner API); the checker relies
/// only on the output contract: fully populated rows, clamped to
/// `MAX_SUGGESTIONS` by the caller. Estimation is best-effort and may run even
/// when every per-keyword lookup failed.
#[async_trait]
pub trait RelatedKeywordEstimator: Send + Sync {
    async fn estimate(
        &self,
        keywords: &[String],
        outcomes: &[SearchOutcome],
    ) -> Result<Vec<RelatedKeywordMetric>>;
}

/// Default estimator: deterministic, no external calls. Mines phrases from
/// result titles that contain the keyword and tops up with common search
/// modifiers. Competition is derived from the provider's total result count;
/// volume figures are not knowable here and stay `"N/A"`.
pub struct HeuristicEstimator;

#[async_trait]
impl RelatedKeywordEstimator for HeuristicEstimator {
    async fn estimate(
        &self,
        keywords: &[String],
        outcomes: &[SearchOutcome],
    ) -> Result<Vec<RelatedKeywordMetric>> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut suggestions = Vec::new();

        for (i, keyword) in keywords.iter().enumerate() {
            let outcome = outcomes.get(i);
            let competition = outcome.map(competition_from).unwrap_or(Competition::NA);

            if let Some(SearchOutcome::Results { items, .. }) = outcome {
                let titles: Vec<&str> = items.iter().map(|it| it.title.as_str()).collect();
                for phrase in mined_phrases(keyword, &titles) {
                    push_unique(&mut suggestions, &mut seen, phrase, competition);
                }
            }

            for phrase in template_phrases(keyword) {
                push_unique(&mut suggestions, &mut seen, phrase, competition);
            }

            if suggestions.len() >= MAX_SUGGESTIONS {
                break;
            }
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        Ok(suggestions)
    }
}

fn push_unique(
    suggestions: &mut Vec<RelatedKeywordMetric>,
    seen: &mut HashSet<String>,
    phrase: String,
    competition: Competition,
) {
    if suggestions.len() >= MAX_SUGGESTIONS {
        return;
    }
    if seen.insert(phrase.clone()) {
        suggestions.push(RelatedKeywordMetric::unavailable(phrase, competition));
    }
}

fn competition_from(outcome: &SearchOutcome) -> Competition {
    match outcome {
        SearchOutcome::Results { result_count, .. } => {
            if *result_count >= 10_000_000 {
                Competition::High
            } else if *result_count >= 100_000 {
                Competition::Medium
            } else {
                Competition::Low
            }
        }
        _ => Competition::NA,
    }
}

/// Title segments that contain the keyword, split on the separators result
/// titles conventionally use.
fn mined_phrases(keyword: &str, titles: &[&str]) -> Vec<String> {
    let needle = keyword.to_lowercase();
    let mut phrases = Vec::new();

    for title in titles {
        for segment in title.split(['|', ':', '–']) {
            let phrase = segment.trim().to_lowercase();
            if phrase != needle
                && phrase.contains(&needle)
                && phrase.len() <= 60
                && phrase.split_whitespace().count() <= 6
            {
                phrases.push(phrase);
            }
        }
    }

    phrases
}

fn template_phrases(keyword: &str) -> Vec<String> {
    vec![
        format!("best {keyword}"),
        format!("{keyword} online"),
        format!("{keyword} near me"),
        format!("how to choose {keyword}"),
        format!("{keyword} alternatives"),
        format!("{keyword} reviews"),
    ]
}
