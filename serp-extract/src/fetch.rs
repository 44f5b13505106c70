//! Fetch adapter: one upstream GET per search, no retries.
//!
//! The whole exchange, headers and body, runs under the configured time
//! budget. On expiry the in-flight request future is dropped, which
//! cancels it, and [`SearchError::Timeout`] is returned.

use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;

/// Fetch the provider's result page for `query`.
///
/// Sends `GET {endpoint}?q={query}&hl={language}` and returns the body of
/// a 2xx response.
///
/// # Errors
///
/// - [`SearchError::Timeout`] if the budget in `config.timeout_seconds`
///   expires.
/// - [`SearchError::Http`] on connection failures and non-2xx statuses.
pub async fn fetch_html(query: &str, config: &SearchConfig) -> Result<String, SearchError> {
    let budget = Duration::from_secs(config.timeout_seconds);
    match tokio::time::timeout(budget, fetch_inner(query, config)).await {
        Ok(result) => result,
        Err(_) => Err(SearchError::Timeout(format!(
            "provider did not answer within {}s",
            config.timeout_seconds
        ))),
    }
}

async fn fetch_inner(query: &str, config: &SearchConfig) -> Result<String, SearchError> {
    tracing::trace!(query, endpoint = %config.endpoint, "fetching provider page");
    let client = http::build_client(config)?;

    let response = client
        .get(&config.endpoint)
        .query(&[("q", query), ("hl", config.language.as_str())])
        .send()
        .await
        .map_err(|e| request_error(e, config))?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%status, "provider returned non-success status");
        return Err(SearchError::Http(format!("provider returned {status}")));
    }

    let body = response
        .text()
        .await
        .map_err(|e| request_error(e, config))?;
    tracing::debug!(bytes = body.len(), "provider page received");
    Ok(body)
}

fn request_error(err: reqwest::Error, config: &SearchConfig) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout(format!(
            "provider did not answer within {}s",
            config.timeout_seconds
        ))
    } else {
        SearchError::Http(format!("provider request failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> SearchConfig {
        SearchConfig {
            endpoint: format!("{}/search", server.uri()),
            timeout_seconds: 1,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn returns_body_and_sends_query_and_language() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "rust lang"))
            .and(query_param("hl", "ja"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let body = fetch_html("rust lang", &config_for(&server)).await;
        assert_eq!(body.ok().as_deref(), Some("<html>ok</html>"));

        let requests = server.received_requests().await.unwrap_or_default();
        let language = requests
            .first()
            .and_then(|r| r.headers.get("accept-language"))
            .and_then(|v| v.to_str().ok());
        assert_eq!(language, Some("ja,en-US;q=0.9,en;q=0.8"));
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = fetch_html("q", &config_for(&server)).await;
        match err {
            Err(SearchError::Http(msg)) => assert!(msg.contains("503"), "{msg}"),
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let err = fetch_html("q", &config_for(&server)).await;
        assert!(matches!(err, Err(SearchError::Timeout(_))), "{err:?}");
    }

    #[tokio::test]
    async fn unreachable_provider_is_http_error() {
        let config = SearchConfig {
            endpoint: "http://127.0.0.1:1/search".into(),
            timeout_seconds: 2,
            ..Default::default()
        };
        let err = fetch_html("q", &config).await;
        assert!(matches!(err, Err(SearchError::Http(_))), "{err:?}");
    }
}
