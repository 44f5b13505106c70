//! Error types for the serp host.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serp_extract::SearchError;

/// Errors raised while configuring or serving the search endpoint.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The listener could not be bound or the server stopped abnormally.
    #[error("server error: {0}")]
    Server(String),

    /// A search request failed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, HostError>;

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        match self {
            Self::Search(SearchError::MissingQuery) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": "Query parameter is required"})),
            )
                .into_response(),
            other => {
                match &other {
                    Self::Search(e) if e.is_upstream() => {
                        tracing::warn!(error = %other, "search provider failed");
                    }
                    _ => tracing::error!(error = %other, "search request failed"),
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({
                        "error": "Failed to fetch search results",
                        "details": other.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let err = HostError::Config("port must be non-zero".into());
        assert_eq!(err.to_string(), "config error: port must be non-zero");
    }

    #[test]
    fn search_errors_display_transparently() {
        let timeout = SearchError::Timeout("provider did not answer within 10s".into());
        let err = HostError::from(timeout);
        assert_eq!(
            err.to_string(),
            "search timed out: provider did not answer within 10s"
        );
    }

    #[test]
    fn missing_query_maps_to_bad_request() {
        let response = HostError::from(SearchError::MissingQuery).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_failures_map_to_internal_error() {
        for err in [
            SearchError::Http("provider returned 503".into()),
            SearchError::Timeout("slow".into()),
        ] {
            assert!(err.is_upstream());
            let response = HostError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn local_failures_map_to_internal_error() {
        for err in [
            HostError::from(SearchError::Config("max_results must be greater than 0".into())),
            HostError::Server("listener closed".into()),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
