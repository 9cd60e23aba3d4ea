//! Liveness endpoint.

use axum::{Router, routing::get};

use crate::state::AppState;

/// GET /alive - Liveness check, no authentication.
async fn alive() -> &'static str {
    "ok"
}

/// Build liveness routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/alive", get(alive))
}
