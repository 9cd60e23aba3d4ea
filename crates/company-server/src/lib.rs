//! company-server: HTTP API server for the company registry
//!
//! This crate provides:
//! - REST API endpoints (create, update, delete, get)
//! - Role-based bearer token authorization
//! - Change notifications published to Kafka
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! Handlers reach persistence, token verification, and notification only
//! through the traits held in [`AppState`].

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod notify;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use config::{ConfigError, LogFormat, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use notify::{KafkaNotifier, Notifier, NotifyError};
pub use server::build_app;
pub use state::AppState;

// Re-export dependent crates
pub use company_core;
pub use company_store;
