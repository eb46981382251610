//! Reqwest-backed client for Ollama's /api/generate endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::upstream::{UpstreamClient, UpstreamError};

/// Request payload for POST /api/generate.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// The subset of Ollama's generate response we relay. A missing `response`
/// field decodes as the empty string.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// HTTP client for a single Ollama server.
pub struct OllamaClient {
    client: reqwest::Client,
    host: String,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            // Trailing slashes in OLLAMA_HOST would produce "//api/generate".
            host: config.host.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.host)
    }
}

#[async_trait]
impl UpstreamClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let payload = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        debug!(url = %self.generate_url(), model = %self.model, "Forwarding to Ollama");

        let resp = self
            .client
            .post(self.generate_url())
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    UpstreamError::Timeout(e.to_string())
                } else {
                    UpstreamError::Transport(e.to_string())
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url_strips_trailing_slash() {
        let client = OllamaClient::new(&UpstreamConfig {
            host: "http://localhost:11434/".to_string(),
            ..UpstreamConfig::default()
        });
        assert_eq!(client.generate_url(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_generate_request_wire_format() {
        let payload = GenerateRequest {
            model: "gemma3:27b",
            prompt: "hello",
            stream: false,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "gemma3:27b",
                "prompt": "hello",
                "stream": false
            })
        );
    }

    #[test]
    fn test_missing_response_field_decodes_as_empty() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"done": true}"#).unwrap();
        assert_eq!(parsed.response, "");
    }
}
