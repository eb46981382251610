//! HTTP server exposing the gateway API.
//!
//! - [`api`]: Request/response types, error mapping, and route handlers

pub mod api;
