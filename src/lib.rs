//! ollama-gate: API-key-gated HTTP gateway for a local Ollama server.
//!
//! Exposes a minimal forwarding API:
//!   GET /generate?apikey=..&prompt=..  → relays the prompt to Ollama's
//!                                        /api/generate and returns the
//!                                        generated text
//!   GET /health                        → liveness probe
//!
//! The upstream client is injected behind a trait so handlers can be
//! tested without a running Ollama instance.

pub mod config;
pub mod server;
pub mod upstream;
