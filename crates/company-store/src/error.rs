//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
///
/// Raw driver failures are classified here so callers never inspect
/// `sqlx` errors themselves.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the given id.
    #[error("company not found")]
    NotFound,

    /// The name is already taken by another company.
    #[error("duplicate company name")]
    DuplicateName,

    /// A stored row could not be mapped to the domain type.
    #[error("corrupt row: {0}")]
    CorruptRow(String),

    /// Unclassified database failure.
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// PostgreSQL SQLSTATE for unique_violation.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Whether a driver error is a unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            StoreError::NotFound
        } else if is_unique_violation(&err) {
            StoreError::DuplicateName
        } else {
            StoreError::Database(err)
        }
    }
}
