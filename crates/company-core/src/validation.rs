//! Field-level validation of create and update payloads.
//!
//! Checks run in a fixed order and stop at the first failure:
//! name, then description, then legal type. For updates, an entirely empty
//! payload is rejected before any field is looked at.

use crate::types::{
    CompanyPatch, CreateCompanyRequest, LegalType, NewCompany, UpdateCompanyRequest,
};

/// Maximum length of a company name, in Unicode scalar values.
pub const MAX_NAME_CHARS: usize = 15;

/// Maximum length of a company description, in Unicode scalar values.
pub const MAX_DESCRIPTION_CHARS: usize = 3000;

/// A client-fixable problem with a request payload.
///
/// The display strings are part of the public API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Empty request - nothing to do")]
    NothingToDo,

    #[error("Invalid name")]
    InvalidName,

    #[error("Invalid description")]
    InvalidDescription,

    #[error("Invalid type")]
    InvalidType,
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::InvalidName);
    }
    Ok(())
}

fn check_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::InvalidDescription);
    }
    Ok(())
}

fn parse_legal_type(raw: &str) -> Result<LegalType, ValidationError> {
    raw.parse().map_err(|_| ValidationError::InvalidType)
}

/// Validate a create payload.
pub fn validate_create(request: CreateCompanyRequest) -> Result<NewCompany, ValidationError> {
    check_name(&request.name)?;
    check_description(&request.description)?;
    let legal_type = parse_legal_type(&request.legal_type)?;

    Ok(NewCompany {
        name: request.name,
        description: request.description,
        employee_count: request.employee_count,
        is_registered: request.is_registered,
        legal_type,
    })
}

/// Validate a partial update payload.
pub fn validate_update(request: UpdateCompanyRequest) -> Result<CompanyPatch, ValidationError> {
    if request.is_empty() {
        return Err(ValidationError::NothingToDo);
    }

    if let Some(name) = &request.name {
        check_name(name)?;
    }
    if let Some(description) = &request.description {
        check_description(description)?;
    }
    let legal_type = request
        .legal_type
        .as_deref()
        .map(parse_legal_type)
        .transpose()?;

    Ok(CompanyPatch {
        name: request.name,
        description: request.description,
        employee_count: request.employee_count,
        is_registered: request.is_registered,
        legal_type,
    })
}
