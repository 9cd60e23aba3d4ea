//! Command-line utility for company registry bearer tokens.
//!
//! - issue: Sign a token carrying a list of roles
//! - check: Verify a token and test it for a role
//!
//! Configuration via environment:
//! - JWT_KEY: Base64-encoded HS256 signing key (same value the server uses)

mod commands;

use clap::{Parser, Subcommand};

use commands::{check::CheckArgs, issue::IssueArgs};

/// Company registry token utility
///
/// Issues and checks the bearer tokens accepted by company-server.
/// Prints JSON by default; use --human for formatted output.
#[derive(Parser)]
#[command(name = "company-token")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Base64-encoded signing key
    #[arg(long, env = "JWT_KEY", global = true, hide_env_values = true)]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a token carrying the given roles
    Issue(IssueArgs),

    /// Check whether a token carries a role
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Issue(args) => commands::issue::execute(&cli.key, cli.human, args),
        Commands::Check(args) => commands::check::execute(&cli.key, cli.human, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
