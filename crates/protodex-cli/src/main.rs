//! protodex CLI
//!
//! The command-line interface for checking the game-data index against its
//! sources and itself.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    match run() {
        // A completed run with findings exits 1; fatal failures also exit 1,
        // after printing the cause.
        Ok(clean) => {
            if !clean {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Validate { index, report } => commands::run_validate(&index, &report),
        Commands::Verify {
            server,
            client,
            db_dir,
        } => commands::run_verify(&server, &client, &db_dir),
        Commands::Sources { config, db_dir } => commands::run_sources(&config, &db_dir),
    }
}
