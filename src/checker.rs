use futures::future::join_all;
use serde::Serialize;

use crate::estimator::{MAX_SUGGESTIONS, RelatedKeywordEstimator, RelatedKeywordMetric};
use crate::ranking::{RankingResult, extract_ranking};
use crate::search::{SearchClient, SearchOutcome};

/// Everything one analysis run produces. Request-scoped, never persisted.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub original_keyword_rankings: Vec<RankingResult>,
    pub related_keyword_suggestions: Vec<RelatedKeywordMetric>,
}

/// Orchestrates one analysis run: fan out the keyword lookups, map each
/// outcome through the ranking contract, then ask the estimator for related
/// keywords. No shared mutable state across runs.
pub struct RankChecker {
    search: SearchClient,
    estimator: Box<dyn RelatedKeywordEstimator>,
}

impl RankChecker {
    pub fn new(search: SearchClient, estimator: Box<dyn RelatedKeywordEstimator>) -> RankChecker {
        RankChecker { search, estimator }
    }

    /// Splits a comma-separated keyword list, dropping blanks.
    pub fn parse_keywords(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect()
    }

    pub async fn check(
        &self,
        keywords: &[String],
        platform: &str,
        country: &str,
        target_url: Option<&str>,
    ) -> AnalysisResult {
        // join_all polls the lookups concurrently but yields them in input
        // order, whatever order they complete in.
        let lookups = keywords
            .iter()
            .map(|keyword| self.search.search(keyword, platform, country));
        let outcomes: Vec<SearchOutcome> = join_all(lookups).await;

        let original_keyword_rankings = keywords
            .iter()
            .zip(&outcomes)
            .map(|(keyword, outcome)| extract_ranking(keyword, country, target_url, outcome))
            .collect();

        // Estimation is best-effort: a failure degrades to no suggestions.
        let mut related_keyword_suggestions =
            match self.estimator.estimate(keywords, &outcomes).await {
                Ok(suggestions) => suggestions,
                Err(e) => {
                    log::error!("related keyword estimation failed: {e:#}");
                    Vec::new()
                }
            };
        related_keyword_suggestions.truncate(MAX_SUGGESTIONS);

        AnalysisResult {
            original_keyword_rankings,
            related_keyword_suggestions,
        }
    }
}
