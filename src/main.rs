use std::sync::Arc;

use serprank::api;
use serprank::checker::RankChecker;
use serprank::config::SearchConfig;
use serprank::estimator::HeuristicEstimator;
use serprank::search::SearchClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let config = SearchConfig::from_env();
    if let Some(problem) = config.credential_problem() {
        // Not fatal: lookups report the problem per keyword instead.
        log::warn!("live search disabled: {problem}");
    }

    let checker = Arc::new(RankChecker::new(
        SearchClient::new(config),
        Box::new(HeuristicEstimator),
    ));

    let router = api::create_router(checker);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
