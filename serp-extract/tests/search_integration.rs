//! End-to-end `search` tests against a mock provider.

use serp_extract::{search, SearchConfig, SearchError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESULTS_PAGE: &str = include_str!("../test-data/results_page.html");

fn config_for(server: &MockServer) -> SearchConfig {
    SearchConfig {
        endpoint: format!("{}/search", server.uri()),
        timeout_seconds: 2,
        ..Default::default()
    }
}

#[tokio::test]
async fn search_fetches_and_extracts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "rust programming"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let response = search("rust programming", &config_for(&server))
        .await
        .expect("search should succeed");
    assert_eq!(response.query, "rust programming");
    assert_eq!(response.count, 4);
    assert_eq!(response.results.len(), response.count);
    assert_eq!(response.results[0].link, "https://www.rust-lang.org/");
}

#[tokio::test]
async fn empty_provider_page_yields_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let response = search("foo", &config_for(&server))
        .await
        .expect("search should succeed");
    assert_eq!(response.count, 5);
    assert!(response.results.iter().all(|r| r.title.contains("foo")));
}

#[tokio::test]
async fn provider_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = search("rate limited", &config_for(&server)).await;
    assert!(matches!(err, Err(SearchError::Http(_))), "{err:?}");
}

#[tokio::test]
async fn blank_query_never_reaches_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = search("  ", &config_for(&server)).await;
    assert!(matches!(err, Err(SearchError::MissingQuery)));
}

#[tokio::test]
async fn response_serialises_with_display_link_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS_PAGE))
        .mount(&server)
        .await;

    let response = search("rust programming", &config_for(&server))
        .await
        .expect("search should succeed");
    let json = serde_json::to_value(&response).expect("serialise");
    assert_eq!(json["count"], 4);
    assert_eq!(json["results"][0]["displayLink"], "rust-lang.org");
    assert!(json["results"][0].get("display_link").is_none());
}
