//! Company CRUD routes.
//!
//! This module implements the company endpoints:
//! - POST /company - Create a company (writer)
//! - PATCH /company/{id} - Partially update a company (writer)
//! - DELETE /company/{id} - Delete a company (writer)
//! - GET /company/{id} - Fetch a company (reader)
//!
//! Each handler parses the path id, then the body, then validates fields in
//! a fixed order; the first failure determines the single error returned.
//! Successful mutations publish a change event. Notification failures are
//! logged and do not affect the response.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
};
use company_core::{
    ChangeEvent, Company, CompanyId, CreateCompanyRequest, EventKind, UpdateCompanyRequest,
    validate_create, validate_update,
};

use crate::error::{ApiError, ApiResult};
use crate::extract::{CompanyIdPath, JsonBody};
use crate::middleware::auth::{require_reader, require_writer};
use crate::state::AppState;

// ============================================================================
// Helper Functions
// ============================================================================

/// Publish a change event, logging rather than propagating failure.
async fn notify(state: &AppState, id: CompanyId, kind: EventKind) {
    if let Err(e) = state.notifier().send(ChangeEvent::new(id, kind)).await {
        tracing::error!(
            error = %e,
            company_id = %id,
            event = %kind,
            "Notification send failed"
        );
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /company - Create a new company.
///
/// # Response
///
/// - 201 Created: the stored company, including its generated id
/// - 400 Bad Request: invalid body, invalid field, or duplicate name
/// - 500 Internal Server Error: store failure
async fn create_company(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateCompanyRequest>,
) -> ApiResult<(StatusCode, Json<Company>)> {
    let new_company = validate_create(request).inspect_err(|e| {
        tracing::warn!(error = %e, "Invalid create request");
    })?;

    let id = state.store().create(&new_company).await.map_err(|e| {
        tracing::error!(error = %e, "Store create request failed");
        ApiError::from(e)
    })?;

    let company = Company::from_new(id, new_company);
    tracing::info!(company_id = %id, name = %company.name, "Company created");

    notify(&state, id, EventKind::Created).await;

    Ok((StatusCode::CREATED, Json(company)))
}

/// PATCH /company/{id} - Update the given fields of a company.
///
/// Absent or null fields are left unchanged.
///
/// # Response
///
/// - 200 OK: empty body
/// - 400 Bad Request: invalid id or body, nothing to do, invalid field, or duplicate name
/// - 404 Not Found: no such company
/// - 500 Internal Server Error: store failure
async fn update_company(
    State(state): State<AppState>,
    CompanyIdPath(id): CompanyIdPath,
    JsonBody(request): JsonBody<UpdateCompanyRequest>,
) -> ApiResult<StatusCode> {
    let patch = validate_update(request).inspect_err(|e| {
        tracing::warn!(error = %e, company_id = %id, "Invalid update request");
    })?;

    state.store().update(id, &patch).await.map_err(|e| {
        tracing::error!(error = %e, company_id = %id, "Store update request failed");
        ApiError::from(e)
    })?;

    tracing::info!(company_id = %id, "Company updated");

    notify(&state, id, EventKind::Updated).await;

    Ok(StatusCode::OK)
}

/// DELETE /company/{id} - Delete a company.
///
/// # Response
///
/// - 200 OK: empty body
/// - 400 Bad Request: invalid id
/// - 404 Not Found: no such company
/// - 500 Internal Server Error: store failure
async fn delete_company(
    State(state): State<AppState>,
    CompanyIdPath(id): CompanyIdPath,
) -> ApiResult<StatusCode> {
    state.store().delete(id).await.map_err(|e| {
        tracing::error!(error = %e, company_id = %id, "Store delete request failed");
        ApiError::from(e)
    })?;

    tracing::info!(company_id = %id, "Company deleted");

    notify(&state, id, EventKind::Deleted).await;

    Ok(StatusCode::OK)
}

/// GET /company/{id} - Fetch a company.
///
/// # Response
///
/// - 200 OK: the stored company (`description` omitted when empty)
/// - 400 Bad Request: invalid id
/// - 404 Not Found: no such company
/// - 500 Internal Server Error: store failure
async fn get_company(
    State(state): State<AppState>,
    CompanyIdPath(id): CompanyIdPath,
) -> ApiResult<Json<Company>> {
    let company = state.store().get(id).await.map_err(|e| {
        tracing::error!(error = %e, company_id = %id, "Store select request failed");
        ApiError::from(e)
    })?;

    Ok(Json(company))
}

/// Build company routes with their role guards.
pub fn routes(state: &AppState) -> Router<AppState> {
    let readers = Router::new()
        .route("/company/{id}", get(get_company))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_reader));

    let writers = Router::new()
        .route("/company", post(create_company))
        .route(
            "/company/{id}",
            patch(update_company).delete(delete_company),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_writer));

    readers.merge(writers)
}

// ============================================================================
// Tests
// ============================================================================
