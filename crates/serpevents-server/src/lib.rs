//! Pass-through HTTP proxy for the upstream search API.
//!
//! Two routes, no state beyond an HTTP client and the server-held API key:
//! - `GET /health` is a liveness check.
//! - `GET /search` forwards the query upstream with `engine=google_events`
//!   enforced and the API key injected server-side. The upstream status and
//!   JSON body are passed straight back to the caller.

pub mod config;
pub mod error;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

pub use config::ProxyConfig;
pub use error::ServerError;

/// Shared state for the proxy handlers.
#[derive(Debug)]
pub struct AppState {
    http_client: reqwest::Client,
    api_key: String,
    upstream: String,
}

impl AppState {
    /// Builds the state from configuration. Fails when no API key is set.
    pub fn from_config(config: &ProxyConfig) -> Result<Self, ServerError> {
        let api_key = config.api_key.clone().ok_or(ServerError::MissingApiKey)?;
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed to create HTTP client");

        Ok(Self {
            http_client,
            api_key,
            upstream: config.upstream.clone(),
        })
    }
}

/// Client-supplied search parameters. Only these are forwarded; everything
/// else (notably the API key) is fixed server-side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// The search query. Required.
    pub q: Option<String>,
    /// Geographic location bias.
    pub location: Option<String>,
    /// Interface language.
    pub hl: Option<String>,
    /// Country code.
    pub gl: Option<String>,
    /// Result page offset.
    pub start: Option<String>,
}

/// Builds the proxy router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search", get(search))
        .with_state(state)
}

/// Runs the proxy until the process is stopped.
pub async fn serve(config: ProxyConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState::from_config(&config)?);
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("search proxy listening on http://{addr}");
    axum::serve(listener, app).await.map_err(ServerError::Serve)?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> (StatusCode, Json<Value>) {
    let Some(q) = params.q.as_deref().filter(|q| !q.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing required query param: q"})),
        );
    };

    let query = upstream_query(q, &params, &state.api_key);
    let response = match state
        .http_client
        .get(&state.upstream)
        .query(&query)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "upstream request failed");
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": format!("upstream request failed: {}", e)})),
            );
        }
    };

    // Pass the upstream status and body through untouched.
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = response.text().await.unwrap_or_default();
    let value: Value = serde_json::from_str(&body).unwrap_or_else(|_| json!({"error": body}));
    (status, Json(value))
}

/// The query string sent upstream: the engine and API key are always fixed
/// server-side, the remaining parameters are client pass-through.
fn upstream_query(q: &str, params: &SearchQuery, api_key: &str) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("engine", "google_events".to_string()),
        ("q", q.to_string()),
        ("api_key", api_key.to_string()),
    ];
    if let Some(ref location) = params.location {
        query.push(("location", location.clone()));
    }
    if let Some(ref hl) = params.hl {
        query.push(("hl", hl.clone()));
    }
    if let Some(ref gl) = params.gl {
        query.push(("gl", gl.clone()));
    }
    if let Some(ref start) = params.start {
        query.push(("start", start.clone()));
    }
    query
}
