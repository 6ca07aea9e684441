use serde::{Deserialize, Serialize};

use crate::estimator::RelatedKeywordMetric;
use crate::ranking::RankingResult;

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// Comma-separated keyword list.
    pub keywords: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "default_country")]
    pub country: String,
    /// Optional target URL; when present, rankings report that URL's own
    /// position instead of the top result.
    #[serde(default)]
    pub url: Option<String>,
}

fn default_platform() -> String {
    "google".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub original_keyword_rankings: Vec<RankingResult>,
    pub related_keyword_suggestions: Vec<RelatedKeywordMetric>,
    pub total_keywords: usize,
    pub processing_time_ms: u128,
}
