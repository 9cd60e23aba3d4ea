//! Role-based authorization for bearer tokens.
//!
//! Routes are guarded with [`require_reader`] or [`require_writer`] via
//! `axum::middleware::from_fn_with_state`. The `Authorization` header must be
//! exactly `Bearer <token>`. A missing or malformed header, or a token that
//! fails verification, is rejected as "Invalid JWT"; a genuine token without
//! the role is rejected as "Access denied". Both are 403.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use company_core::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}

/// Check the request's bearer token for `role`.
pub fn authorize(state: &AppState, headers: &HeaderMap, role: Role) -> Result<(), ApiError> {
    let Some(token) = bearer_token(headers) else {
        tracing::warn!("Authorization header is invalid");
        return Err(ApiError::InvalidJwt);
    };

    match state.auth().token_has_role(token, role) {
        Ok(true) => Ok(()),
        Ok(false) => {
            tracing::warn!(role = %role, "Access denied: role missing from token");
            Err(ApiError::AccessDenied)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Authorization check failed");
            Err(ApiError::InvalidJwt)
        }
    }
}

/// Middleware admitting tokens with the `reader` role.
pub async fn require_reader(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    authorize(&state, request.headers(), Role::Reader)?;
    Ok(next.run(request).await)
}

/// Middleware admitting tokens with the `writer` role.
pub async fn require_writer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    authorize(&state, request.headers(), Role::Writer)?;
    Ok(next.run(request).await)
}
