//! Route definitions for the HTTP API.

pub mod companies;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Prefix for versioned API routes.
pub const API_PREFIX: &str = "/api/v1";

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .nest(API_PREFIX, companies::routes(&state))
        .with_state(state)
}
