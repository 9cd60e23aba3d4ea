//! ISSUE command - Sign a token carrying a set of roles.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, output, token_service};

/// Arguments for the issue command.
#[derive(Args)]
pub struct IssueArgs {
    /// Roles to grant (e.g. reader writer)
    #[arg(required = true)]
    pub roles: Vec<String>,
}

/// An issued token.
#[derive(Debug, Deserialize, Serialize)]
pub struct IssuedToken {
    pub roles: Vec<String>,
    pub token: String,
}

impl HumanReadable for IssuedToken {
    fn print_human(&self) {
        println!("{}", "Token issued".green().bold());
        println!();
        println!("  {} {}", "Roles:".cyan(), self.roles.join(", "));
        println!("  {} {}", "Token:".cyan(), self.token);
    }
}

/// Sign a token for `roles` with `key`.
pub fn issue(key: &str, roles: Vec<String>) -> Result<IssuedToken> {
    if let Some(blank) = roles.iter().find(|r| r.trim().is_empty()) {
        bail!("role names must not be blank: {blank:?}");
    }

    let token = token_service(key)?.issue(&roles)?;
    Ok(IssuedToken { roles, token })
}

/// Execute the issue command.
pub fn execute(key: &str, human: bool, args: IssueArgs) -> Result<()> {
    let issued = issue(key, args.roles)?;
    output(&issued, human)
}
