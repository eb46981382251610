//! Runtime configuration for ollama-gate.
//!
//! Configuration can be loaded from a JSON file or constructed programmatically.
//! Two environment variables override whatever the file (or defaults) provide:
//! `OLLAMA_HOST` for the upstream base URL and `API_KEY` for the static key.

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "ollama-gate", about = "API-key-gated gateway for a local Ollama server")]
pub struct Cli {
    /// Path to configuration file (JSON).
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// HTTP listen address.
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,

    /// Upstream Ollama configuration.
    pub upstream: UpstreamConfig,

    /// Authentication configuration.
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address (e.g. "0.0.0.0:8080").
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream Ollama settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the Ollama server.
    pub host: String,

    /// Model name passed to /api/generate.
    pub model: String,

    /// Request timeout in seconds for the upstream call.
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            host: "http://host.docker.internal:11434".to_string(),
            model: "gemma3:27b".to_string(),
            request_timeout_secs: 300,
        }
    }
}

/// Static API key settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The key clients must present in the `apikey` query parameter.
    pub api_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: "default-insecure-key".to_string(),
        }
    }
}

/// Environment variable overrides, captured separately from the process
/// environment so override logic stays unit-testable.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub ollama_host: Option<String>,
    pub api_key: Option<String>,
}

impl EnvOverrides {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self {
            ollama_host: std::env::var("OLLAMA_HOST").ok(),
            api_key: std::env::var("API_KEY").ok(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults for a
    /// missing file, then apply environment overrides on top.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let data = std::fs::read_to_string(path)?;
            serde_json::from_str(&data)?
        } else {
            tracing::warn!("Config file not found at {:?}, using defaults", path);
            Config::default()
        };
        config.apply_overrides(EnvOverrides::from_env());
        Ok(config)
    }

    /// Apply environment overrides. Env wins over file values.
    pub fn apply_overrides(&mut self, env: EnvOverrides) {
        if let Some(host) = env.ollama_host {
            self.upstream.host = host;
        }
        if let Some(key) = env.api_key {
            self.auth.api_key = key;
        }
    }
}
