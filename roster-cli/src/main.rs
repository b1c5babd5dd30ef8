//! Roster CLI - an in-memory user registry in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{get, list, shell, status};

/// Roster - an in-memory user registry
#[derive(Parser, Debug)]
#[command(name = "roster", version, about, long_about = None)]
struct Cli {
    /// Seed file to load instead of the configured one
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// List all users
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one user by id
    Get {
        /// User id
        #[arg(allow_negative_numbers = true)]
        id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show registry summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session against one registry
    Shell,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let ctx = commands::get_context(cli.seed, cli.debug)?;
    tracing::debug!(command = ?cli.command, "running command");

    match cli.command {
        Commands::List { json } => list::run(&ctx, json),
        Commands::Get { id, json } => get::run(&ctx, id, json),
        Commands::Status { json } => status::run(&ctx, json),
        Commands::Shell => shell::run(&ctx),
    }
}
