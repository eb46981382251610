//! Upstream inference client.
//!
//! - [`UpstreamClient`]: trait used by HTTP handlers (injection seam for tests)
//! - [`ollama`]: reqwest-backed client for the Ollama /api/generate endpoint

pub mod ollama;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the upstream inference server. Every variant surfaces to API
/// clients as HTTP 500 with the stringified cause.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to reach upstream: {0}")]
    Transport(String),

    #[error("upstream request timed out: {0}")]
    Timeout(String),

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("upstream response was not valid JSON: {0}")]
    Decode(String),
}

/// Abstraction over the client that forwards prompts to the inference server.
///
/// Implementations must be Send + Sync so they can be shared across request
/// handlers via `Arc`.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Run a non-streaming generation and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError>;
}
