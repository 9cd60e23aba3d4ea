//! Request extractors that reject with [`ApiError`] instead of axum's
//! default plain-text rejections.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use company_core::CompanyId;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body, parsed regardless of `Content-Type`.
///
/// Any read or parse failure becomes [`ApiError::InvalidRequest`].
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read request body");
            ApiError::InvalidRequest
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::warn!(error = %e, "Invalid request body");
            ApiError::InvalidRequest
        })
    }
}

/// The `{id}` path segment parsed as a [`CompanyId`].
///
/// Rejects with [`ApiError::InvalidId`].
pub struct CompanyIdPath(pub CompanyId);

impl<S> FromRequestParts<S> for CompanyIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Missing id path parameter");
                ApiError::InvalidId
            })?;

        raw.parse().map(CompanyIdPath).map_err(|e| {
            tracing::warn!(error = %e, id = %raw, "Invalid id");
            ApiError::InvalidId
        })
    }
}
