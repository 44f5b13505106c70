//! HTTP surface: `GET /api/search` and `GET /health`.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serp_extract::{Extractor, SearchConfig, SearchResponse};

use crate::config::HostConfig;
use crate::error::{HostError, Result};

struct AppState {
    config: SearchConfig,
    extractor: Extractor,
}

/// Build the router for `config`.
///
/// The extractor is built once and shared by every request.
pub fn router(config: SearchConfig) -> Router {
    let extractor = Extractor::new(config.extract.clone());
    let state = Arc::new(AppState { config, extractor });

    Router::new()
        .route("/health", get(health))
        .route("/api/search", get(search))
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
///
/// # Errors
///
/// Returns [`HostError::Config`] for invalid search settings and
/// [`HostError::Server`] if the listener cannot be bound or fails.
pub async fn run_server(config: HostConfig) -> Result<()> {
    let search_config = config.to_search_config()?;
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HostError::Server(format!("failed to bind {addr}: {e}")))?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        endpoint = %search_config.endpoint,
        language = %search_config.language,
        "search endpoint listening on http://{local_addr}"
    );
    axum::serve(listener, router(search_config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HostError::Server(e.to_string()))?;
    tracing::info!("search endpoint stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

async fn search(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> std::result::Result<Json<SearchResponse>, HostError> {
    let query = raw.as_deref().and_then(first_query).unwrap_or_default();
    tracing::trace!(query = %query, "search request");
    let response = serp_extract::search_with(&query, &state.config, &state.extractor).await?;
    Ok(Json(response))
}

/// First `q` value in a raw query string. Repeated keys are not an error.
fn first_query(raw: &str) -> Option<String> {
    url::form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
}
