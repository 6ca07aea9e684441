use serde::Deserialize;
use thiserror::Error;

use crate::config::SearchConfig;

/// Google Custom Search JSON API endpoint.
const GOOGLE_API_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// The only platform with a live provider behind it. Every other platform
/// degrades to a deterministic placeholder instead of erroring.
pub const LIVE_PLATFORM: &str = "google";

/// Fixed per-lookup result cap sent to the provider.
const RESULT_CAP: usize = 20;

/// One entry of a search results page. `rank` is the 1-based position in the
/// order the provider returned it; that order is authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultItem {
    pub rank: usize,
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// The tagged result of one search attempt. Exactly one variant per invocation;
/// error variants are values, never exceptions, so one keyword's failure cannot
/// abort the rest of a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Results {
        items: Vec<SearchResultItem>,
        result_count: u64,
    },
    Empty,
    ConfigurationError(String),
    ProviderError { status: u16, message: String },
    ExecutionError(String),
}

/// Internal fetch failure, mapped into `SearchOutcome` at the adapter boundary.
#[derive(Debug, Error)]
enum FetchError {
    #[error("provider returned {status}: {body}")]
    Provider { status: u16, body: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    items: Option<Vec<GoogleItem>>,
    #[serde(rename = "searchInformation")]
    search_information: Option<SearchInformation>,
}

#[derive(Debug, Deserialize)]
struct SearchInformation {
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleItem {
    title: String,
    link: String,
    snippet: Option<String>,
}

/// Search Tool Adapter. Stateless between calls: one best-effort outbound
/// request per keyword, no retries, no caching, transport-default timeouts.
pub struct SearchClient {
    http: reqwest::Client,
    config: SearchConfig,
    base_url: String,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> SearchClient {
        Self::with_base_url(config, GOOGLE_API_URL)
    }

    /// Point the client at a different endpoint. Tests use this to stand a
    /// mock transport in for the live provider.
    pub fn with_base_url(config: SearchConfig, base_url: impl Into<String>) -> SearchClient {
        SearchClient {
            http: reqwest::Client::new(),
            config,
            base_url: base_url.into(),
        }
    }

    pub async fn search(&self, query: &str, platform: &str, country: &str) -> SearchOutcome {
        if !platform.eq_ignore_ascii_case(LIVE_PLATFORM) {
            return placeholder_results(query, platform);
        }

        if let Some(problem) = self.config.credential_problem() {
            return SearchOutcome::ConfigurationError(problem);
        }

        log::info!("searching {LIVE_PLATFORM} for: {query}");
        match self.fetch(query, country).await {
            Ok(response) => results_from_response(response),
            Err(FetchError::Provider { status, body }) => {
                log::error!("search provider error for {query}: {status}");
                SearchOutcome::ProviderError {
                    status,
                    message: body,
                }
            }
            Err(FetchError::Transport(e)) => {
                log::error!("search transport error for {query}: {e}");
                SearchOutcome::ExecutionError(e.to_string())
            }
        }
    }

    async fn fetch(&self, query: &str, country: &str) -> Result<GoogleResponse, FetchError> {
        let gl = country.to_lowercase();
        let num = RESULT_CAP.to_string();

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.search_engine_id.as_str()),
                ("q", query),
                ("gl", gl.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(FetchError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        Ok(res.json::<GoogleResponse>().await?)
    }
}

fn results_from_response(response: GoogleResponse) -> SearchOutcome {
    let raw = response.items.unwrap_or_default();
    if raw.is_empty() {
        return SearchOutcome::Empty;
    }

    let items: Vec<SearchResultItem> = raw
        .into_iter()
        .enumerate()
        .map(|(idx, item)| SearchResultItem {
            rank: idx + 1,
            title: item.title,
            link: item.link,
            snippet: item.snippet.unwrap_or_default(),
        })
        .collect();

    let result_count = response
        .search_information
        .and_then(|info| info.total_results)
        .and_then(|total| total.parse::<u64>().ok())
        .unwrap_or(items.len() as u64);

    SearchOutcome::Results {
        items,
        result_count,
    }
}

/// Deterministic stand-in for platforms without a live provider. Links embed
/// the URL-encoded query, ranks run sequentially from 1.
fn placeholder_results(query: &str, platform: &str) -> SearchOutcome {
    let platform = platform.to_lowercase();
    let encoded = urlencoding::encode(query);

    let items: Vec<SearchResultItem> = (1..=3)
        .map(|rank| SearchResultItem {
            rank,
            title: format!("{platform} result {rank} for \"{query}\""),
            link: format!("https://{platform}.example.com/search?q={encoded}&result={rank}"),
            snippet: format!(
                "Placeholder result {rank}; live lookups are only available for the {LIVE_PLATFORM} platform."
            ),
        })
        .collect();

    SearchOutcome::Results {
        result_count: items.len() as u64,
        items,
    }
}
