//! company-store: Storage layer for the company registry
//!
//! This crate provides:
//! - The `CompanyStore` capability trait consumed by the HTTP handlers
//! - A PostgreSQL implementation over a `sqlx` pool
//! - Classification of driver failures into `StoreError` kinds
//!
//! # Usage
//!
//! ```rust,ignore
//! use company_store::{CompanyStore, PgCompanyStore, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = PgCompanyStore::connect(config).await?;
//!
//! let id = store.create(&new_company).await?;
//! let company = store.get(id).await?;
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::CompanyRow;
pub use repository::CompanyStore;
pub use store::{PgCompanyStore, StoreConfig};

// Re-export company-core for downstream crates
pub use company_core;
