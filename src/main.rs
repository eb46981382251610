//! ollama-gate: API-key-gated HTTP gateway for a local Ollama server.
//!
//! Relays GET /generate prompts to Ollama's /api/generate endpoint and
//! returns the generated text, gated by a static API key.

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use ollama_gate::config::{Cli, Config};
use ollama_gate::server::api::{build_router, AppState};
use ollama_gate::upstream::ollama::OllamaClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Initialize tracing/logging.
    let filter = if cli.verbose {
        "ollama_gate=debug,tower_http=debug"
    } else {
        "ollama_gate=info,tower_http=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with_target(true)
        .init();

    info!("ollama-gate v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration (file, then env overrides).
    let config = Config::load(&cli.config)?;
    let config = Arc::new(config);

    info!(
        upstream = %config.upstream.host,
        model = %config.upstream.model,
        timeout_secs = config.upstream.request_timeout_secs,
        "Configuration loaded"
    );

    // Build the upstream client and application state.
    let upstream = Arc::new(OllamaClient::new(&config.upstream));
    let state = Arc::new(AppState {
        config: config.clone(),
        upstream,
    });

    // Build the HTTP router.
    let app = build_router(state);

    // Start the server. An explicit --listen wins over the config file.
    let listen_addr = if cli.listen != "0.0.0.0:8080" {
        cli.listen
    } else {
        config.server.listen.clone()
    };
    info!(addr = %listen_addr, "Starting server");

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("Listening on {listen_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
