use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use std::time::Instant;

use crate::checker::RankChecker;

use super::models::{CheckRequest, CheckResponse};

pub async fn check_handler(
    State(checker): State<Arc<RankChecker>>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, (StatusCode, String)> {
    let start = Instant::now();

    let keywords = RankChecker::parse_keywords(&request.keywords);
    if keywords.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Keywords cannot be empty".to_string(),
        ));
    }

    let result = checker
        .check(
            &keywords,
            &request.platform,
            &request.country,
            request.url.as_deref(),
        )
        .await;

    Ok(Json(CheckResponse {
        total_keywords: keywords.len(),
        original_keyword_rankings: result.original_keyword_rankings,
        related_keyword_suggestions: result.related_keyword_suggestions,
        processing_time_ms: start.elapsed().as_millis(),
    }))
}
