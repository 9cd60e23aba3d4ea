//! Middleware for authorization and request tracing.

pub mod auth;
pub mod request_id;
