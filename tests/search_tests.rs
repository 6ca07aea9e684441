use mockito::{Matcher, Server};

use serprank::config::SearchConfig;
use serprank::search::{SearchClient, SearchOutcome};

fn test_config() -> SearchConfig {
    SearchConfig::new("test-key", "test-cx")
}

fn results_body() -> String {
    serde_json::json!({
        "searchInformation": { "totalResults": "1230000" },
        "items": [
            { "title": "First result", "link": "https://a.example/x", "snippet": "one" },
            { "title": "Second result", "link": "https://b.example/y" }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_successful_search_assigns_sequential_ranks() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), "test-key".into()),
            Matcher::UrlEncoded("cx".into(), "test-cx".into()),
            Matcher::UrlEncoded("q".into(), "rust web framework".into()),
            // country code is lower-cased before it goes on the wire
            Matcher::UrlEncoded("gl".into(), "us".into()),
            Matcher::UrlEncoded("num".into(), "20".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(results_body())
        .create_async()
        .await;

    let client = SearchClient::with_base_url(test_config(), server.url());
    let outcome = client.search("rust web framework", "google", "US").await;

    mock.assert_async().await;
    match outcome {
        SearchOutcome::Results {
            items,
            result_count,
        } => {
            assert_eq!(result_count, 1_230_000);
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].rank, 1);
            assert_eq!(items[0].link, "https://a.example/x");
            assert_eq!(items[1].rank, 2);
            assert_eq!(items[1].link, "https://b.example/y");
            assert_eq!(items[1].snippet, "");
        }
        other => panic!("expected Results, got {other:?}"),
    }
}

#[tokio::test]
async fn test_zero_items_is_empty_not_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"searchInformation":{"totalResults":"0"}}"#)
        .create_async()
        .await;

    let client = SearchClient::with_base_url(test_config(), server.url());
    let outcome = client.search("no hits at all", "google", "US").await;

    mock.assert_async().await;
    assert_eq!(outcome, SearchOutcome::Empty);
}

#[tokio::test]
async fn test_non_success_status_is_provider_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("rate limit exceeded")
        .create_async()
        .await;

    let client = SearchClient::with_base_url(test_config(), server.url());
    let outcome = client.search("foo", "google", "US").await;

    mock.assert_async().await;
    match outcome {
        SearchOutcome::ProviderError { status, message } => {
            assert_eq!(status, 429);
            assert!(message.contains("rate limit"));
        }
        other => panic!("expected ProviderError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_body_is_execution_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let client = SearchClient::with_base_url(test_config(), server.url());
    let outcome = client.search("foo", "google", "US").await;

    mock.assert_async().await;
    assert!(matches!(outcome, SearchOutcome::ExecutionError(_)));
}

#[tokio::test]
async fn test_missing_credentials_never_hit_the_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = SearchClient::with_base_url(SearchConfig::new("", ""), server.url());
    let outcome = client.search("foo", "google", "US").await;

    mock.assert_async().await;
    assert!(matches!(outcome, SearchOutcome::ConfigurationError(_)));
}

#[tokio::test]
async fn test_placeholder_credentials_never_hit_the_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = SearchConfig::new("YOUR_GOOGLE_API_KEY", "YOUR_SEARCH_ENGINE_ID");
    let client = SearchClient::with_base_url(config, server.url());
    let outcome = client.search("foo", "google", "US").await;

    mock.assert_async().await;
    match outcome {
        SearchOutcome::ConfigurationError(message) => {
            assert!(message.contains("GOOGLE_API_KEY"));
        }
        other => panic!("expected ConfigurationError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unsupported_platform_degrades_to_placeholder() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    // Valid credentials: the placeholder path must still win for non-live platforms.
    let client = SearchClient::with_base_url(test_config(), server.url());
    let outcome = client.search("foo bar", "facebook", "US").await;

    mock.assert_async().await;
    match outcome {
        SearchOutcome::Results { items, .. } => {
            assert!(!items.is_empty());
            assert_eq!(items[0].rank, 1);
            assert!(items[0].link.contains("foo%20bar"));
        }
        other => panic!("expected placeholder Results, got {other:?}"),
    }
}
