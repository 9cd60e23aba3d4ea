//! CHECK command - Verify a token and test it for a role.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, output, token_service};

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Token to verify
    pub token: String,

    /// Role the token must carry
    pub role: String,
}

/// Result of checking a token.
#[derive(Debug, Deserialize, Serialize)]
pub struct CheckResult {
    pub role: String,
    pub granted: bool,
    pub roles: Vec<String>,
}

impl HumanReadable for CheckResult {
    fn print_human(&self) {
        if self.granted {
            println!("{} role {}", "Granted:".green().bold(), self.role);
        } else {
            println!("{} role {}", "Denied:".red().bold(), self.role);
        }
        println!();
        println!("  {} {}", "Token roles:".cyan(), self.roles.join(", "));
    }
}

/// Verify `token` with `key` and check it for `role`.
pub fn check(key: &str, token: &str, role: &str) -> Result<CheckResult> {
    let claims = token_service(key)?.verify(token)?;
    Ok(CheckResult {
        role: role.to_string(),
        granted: claims.roles.iter().any(|r| r == role),
        roles: claims.roles,
    })
}

/// Execute the check command.
pub fn execute(key: &str, human: bool, args: CheckArgs) -> Result<()> {
    let result = check(key, &args.token, &args.role)?;
    output(&result, human)
}
