//! Gateway HTTP API.
//!
//! Implements the two public endpoints:
//! - GET /generate?apikey=..&prompt=..
//! - GET /health

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::upstream::{UpstreamClient, UpstreamError};

/// Application state shared across handlers.
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Arc<dyn UpstreamClient>,
}

/// Build the axum router with all API routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate", get(generate))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─── Request/Response Types ────────────────────────────────────────────────

/// Query parameters for /generate.
#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub apikey: String,
    pub prompt: String,
}

/// Successful generation response: the upstream text, relayed verbatim.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

// ─── Errors ────────────────────────────────────────────────────────────────

/// API-level errors. Serialized as `{"detail": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API Key")]
    InvalidApiKey,

    #[error("Error communicating with Ollama: {0}")]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body shape shared by all failure responses.
#[derive(Debug, Serialize)]
struct ErrorDetail {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ─── Route Handlers ────────────────────────────────────────────────────────

async fn generate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GenerateParams>,
) -> Result<Json<GenerateResponse>, ApiError> {
    // Key check happens before anything touches the upstream.
    if params.apikey != state.config.auth.api_key {
        warn!("Rejected request with invalid API key");
        return Err(ApiError::InvalidApiKey);
    }

    let request_id = Uuid::new_v4().to_string();
    info!(
        request_id = %request_id,
        prompt_chars = params.prompt.len(),
        model = %state.config.upstream.model,
        "Generate request"
    );

    let text = state.upstream.generate(&params.prompt).await?;

    info!(
        request_id = %request_id,
        response_chars = text.len(),
        "Generate complete"
    );

    Ok(Json(GenerateResponse { response: text }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
