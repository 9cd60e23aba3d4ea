//! Command implementations and shared output helpers.

pub mod check;
pub mod issue;

use anyhow::{Context, Result};
use company_core::TokenService;
use serde::Serialize;

/// Print a value as pretty JSON, or in human-readable form.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Build a token service from a base64 signing key.
pub fn token_service(key: &str) -> Result<TokenService> {
    TokenService::from_base64(key).context("invalid signing key")
}
