//! company-core: Core types and rules for the company registry
//!
//! This crate provides:
//! - The `Company` entity, its identifier, and the closed `LegalType` set
//! - Create/update request payloads and their validated forms
//! - Field validation with the fixed client-facing error messages
//! - HS256 bearer token issuing and role verification
//! - Change event types published after mutations
//!
//! It performs no I/O; storage and transport live in `company-store` and
//! `company-server`.

pub mod token;
pub mod types;
pub mod validation;

pub use token::{Authorizer, Claims, TokenError, TokenService};
pub use types::*;
pub use validation::{
    MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS, ValidationError, validate_create, validate_update,
};
