use dotenvy::dotenv;
use std::env;

/// Placeholder values shipped in .env.example; treated the same as unset.
const API_KEY_PLACEHOLDER: &str = "YOUR_GOOGLE_API_KEY";
const ENGINE_ID_PLACEHOLDER: &str = "YOUR_SEARCH_ENGINE_ID";

/// Credentials for the live search provider.
///
/// Passed explicitly into `SearchClient::new` — nothing reads the environment
/// after startup. `from_env` exists as a convenience for the composition root.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_key: String,
    pub search_engine_id: String,
}

impl SearchConfig {
    pub fn new(api_key: impl Into<String>, search_engine_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            search_engine_id: search_engine_id.into(),
        }
    }

    /// Read credentials from the process environment (loads `.env` if present).
    /// Missing values stay empty — `credential_problem` reports them later.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self {
            api_key: get_env_or_default("GOOGLE_API_KEY", ""),
            search_engine_id: get_env_or_default("GOOGLE_SEARCH_ENGINE_ID", ""),
        }
    }

    /// Returns a human-readable message when the credentials cannot back a live
    /// search: absent, blank, or still set to the placeholder sentinel.
    pub fn credential_problem(&self) -> Option<String> {
        if self.api_key.trim().is_empty() || self.api_key == API_KEY_PLACEHOLDER {
            return Some(
                "Google API key is not configured. Set GOOGLE_API_KEY in the environment."
                    .to_string(),
            );
        }
        if self.search_engine_id.trim().is_empty() || self.search_engine_id == ENGINE_ID_PLACEHOLDER
        {
            return Some(
                "Google search engine ID is not configured. Set GOOGLE_SEARCH_ENGINE_ID in the environment."
                    .to_string(),
            );
        }
        None
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
