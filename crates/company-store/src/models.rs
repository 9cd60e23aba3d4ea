//! Database models for the storage layer.
//!
//! These types map directly to rows of the `companies` table. They are
//! separate from the domain types in company-core so that the stored
//! `legal_type` text is checked on the way out.

use company_core::{Company, CompanyId, LegalType};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::StoreError;

/// Database row for the `companies` table.
#[derive(Debug, Clone, FromRow)]
pub struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub employee_count: i32,
    pub is_registered: bool,
    pub legal_type: String,
}

impl TryFrom<CompanyRow> for Company {
    type Error = StoreError;

    fn try_from(row: CompanyRow) -> Result<Self, Self::Error> {
        let legal_type: LegalType = row.legal_type.parse().map_err(|_| {
            StoreError::CorruptRow(format!(
                "company {} has unknown legal_type {:?}",
                row.id, row.legal_type
            ))
        })?;

        Ok(Company {
            id: CompanyId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            employee_count: row.employee_count,
            is_registered: row.is_registered,
            legal_type,
        })
    }
}
