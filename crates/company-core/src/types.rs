//! Core data types for the company registry.
//!
//! This module defines the single business entity managed by the service,
//! the request payloads accepted over the API, and the change events
//! published after a successful mutation.
//!
//! Request payloads keep the loosely typed shape of the wire format so that
//! field validation (see [`crate::validation`]) can report exactly one error
//! in a fixed order. Validated payloads ([`NewCompany`], [`CompanyPatch`])
//! carry typed fields only.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a company.
///
/// Wraps a UUID v4. Assigned by the server on create and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub Uuid);

impl CompanyId {
    /// Creates a new random CompanyId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a CompanyId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CompanyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompanyId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Legal Type
// ============================================================================

/// Legal form of a company.
///
/// The set is closed. Wire strings are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalType {
    #[serde(rename = "Corporations")]
    Corporations,
    #[serde(rename = "NonProfit")]
    NonProfit,
    #[serde(rename = "Cooperative")]
    Cooperative,
    #[serde(rename = "Sole Proprietorship")]
    SoleProprietorship,
}

impl LegalType {
    /// Every accepted legal type.
    pub const ALL: [LegalType; 4] = [
        LegalType::Corporations,
        LegalType::NonProfit,
        LegalType::Cooperative,
        LegalType::SoleProprietorship,
    ];

    /// Wire and storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LegalType::Corporations => "Corporations",
            LegalType::NonProfit => "NonProfit",
            LegalType::Cooperative => "Cooperative",
            LegalType::SoleProprietorship => "Sole Proprietorship",
        }
    }
}

impl fmt::Display for LegalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the accepted legal types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown legal type: {0:?}")]
pub struct UnknownLegalType(pub String);

impl FromStr for LegalType {
    type Err = UnknownLegalType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LegalType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownLegalType(s.to_string()))
    }
}

// ============================================================================
// Company
// ============================================================================

/// A registered company as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    /// Omitted from JSON when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub employee_count: i32,
    pub is_registered: bool,
    #[serde(rename = "type")]
    pub legal_type: LegalType,
}

impl Company {
    /// Build the stored representation of a freshly created company.
    pub fn from_new(id: CompanyId, new: NewCompany) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            employee_count: new.employee_count,
            is_registered: new.is_registered,
            legal_type: new.legal_type,
        }
    }
}

// ============================================================================
// Request Payloads
// ============================================================================

/// Deserialize a JSON `null` as the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Body of `POST /company`.
///
/// Absent and `null` fields take their zero value, so a missing name or type
/// is reported by validation rather than by the JSON parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateCompanyRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub employee_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub is_registered: bool,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub legal_type: String,
}

/// Body of `PATCH /company/{id}`.
///
/// `None` means "leave unchanged"; an explicit JSON `null` is treated the
/// same as an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateCompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub employee_count: Option<i32>,
    pub is_registered: Option<bool>,
    #[serde(rename = "type")]
    pub legal_type: Option<String>,
}

impl UpdateCompanyRequest {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.employee_count.is_none()
            && self.is_registered.is_none()
            && self.legal_type.is_none()
    }
}

/// A validated create payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub name: String,
    pub description: String,
    pub employee_count: i32,
    pub is_registered: bool,
    pub legal_type: LegalType,
}

/// A validated partial update. At least one field is `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub employee_count: Option<i32>,
    pub is_registered: Option<bool>,
    pub legal_type: Option<LegalType>,
}

impl CompanyPatch {
    /// Apply the patch to a stored company, leaving absent fields untouched.
    pub fn apply_to(&self, company: &mut Company) {
        if let Some(name) = &self.name {
            company.name = name.clone();
        }
        if let Some(description) = &self.description {
            company.description = description.clone();
        }
        if let Some(count) = self.employee_count {
            company.employee_count = count;
        }
        if let Some(registered) = self.is_registered {
            company.is_registered = registered;
        }
        if let Some(legal_type) = self.legal_type {
            company.legal_type = legal_type;
        }
    }
}

// ============================================================================
// Roles
// ============================================================================

/// Capability tag carried in a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Reader,
    Writer,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Reader => "reader",
            Role::Writer => "writer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Change Events
// ============================================================================

/// Kind of mutation a change event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Created,
    Updated,
    Deleted,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventKind::Created => "created",
            EventKind::Updated => "updated",
            EventKind::Deleted => "deleted",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification published after a successful create, update, or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub id: CompanyId,
    pub event: EventKind,
    /// Seconds since the Unix epoch. Zero until the notifier stamps it.
    pub timestamp: i64,
}

impl ChangeEvent {
    /// Create an unstamped event.
    pub fn new(id: CompanyId, event: EventKind) -> Self {
        Self {
            id,
            event,
            timestamp: 0,
        }
    }

    /// Set the emission time to now.
    #[must_use]
    pub fn stamped(mut self) -> Self {
        self.timestamp = chrono::Utc::now().timestamp();
        self
    }
}
