//! Proxy Routes
//!
//! - `POST /chat` forwards the body to the configured backend and relays
//!   the backend's status, content type and body unchanged.
//! - `GET /health` reports liveness.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::error::ProxyError;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// Unix seconds at the time of the check.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

// ============================================================================
// STATE
// ============================================================================

#[derive(Clone)]
pub struct ProxyState {
    pub client: reqwest::Client,
    pub backend_url: String,
}

impl ProxyState {
    pub fn new(client: reqwest::Client, backend_url: impl Into<String>) -> Self {
        Self {
            client,
            backend_url: backend_url.into(),
        }
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

async fn forward_chat(
    State(state): State<ProxyState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    let upstream = state
        .client
        .post(&state.backend_url)
        .header(header::CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, backend_url = %state.backend_url, "Backend unreachable");
            ProxyError::Upstream(e)
        })?;

    let status = upstream.status();
    let upstream_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::info!(status = status.as_u16(), bytes = bytes.len(), "Forwarded chat request");

    let mut response = (status, bytes).into_response();
    if let Some(value) = upstream_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    Ok(response)
}

async fn health() -> impl IntoResponse {
    let body = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().timestamp(),
    };
    (StatusCode::OK, Json(body))
}

// ============================================================================
// ROUTER
// ============================================================================

pub fn create_router(state: ProxyState) -> Router {
    Router::new()
        .route("/chat", post(forward_chat))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
