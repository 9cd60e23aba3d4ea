//! The persistence capability used by the HTTP handlers.
//!
//! Handlers depend on this trait rather than on [`crate::PgCompanyStore`]
//! directly, so tests can run the full request path against an in-memory
//! implementation.

use async_trait::async_trait;
use company_core::{Company, CompanyId, CompanyPatch, NewCompany};

use crate::error::StoreResult;

/// CRUD operations over companies.
///
/// Every method returns a classified [`crate::StoreError`]: `NotFound` when
/// no row matched, `DuplicateName` when the unique name constraint fired,
/// anything else as an unclassified failure.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Insert a company and return its generated id.
    async fn create(&self, company: &NewCompany) -> StoreResult<CompanyId>;

    /// Apply a partial update in a single statement.
    async fn update(&self, id: CompanyId, patch: &CompanyPatch) -> StoreResult<()>;

    /// Remove a company.
    async fn delete(&self, id: CompanyId) -> StoreResult<()>;

    /// Fetch a company.
    async fn get(&self, id: CompanyId) -> StoreResult<Company>;

    /// Release underlying connections.
    async fn close(&self);
}
