//! # MkFile Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This file serves as the main entry point for the MkFile CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the create command handler
//! - Deriving the process exit status from the batch outcome
//!
//! ## Architecture
//!
//! The binary exposes a single command surface (file creation), so the
//! create arguments are flattened straight into the top-level CLI instead of
//! living behind a subcommand. Errors and partial failures both exit
//! non-zero; the exit status is `0` only when every requested path succeeded.
//!
//! ## Examples
//!
//! Basic MkFile usage:
//!
//! ```bash
//! # Get help
//! mkfile --help
//!
//! # Create a file with increased verbosity
//! mkfile -vv notes/today.md
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the create handler
//! 4. Report any setup error, then exit with the batch status
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles the create command logic
mod common; // Contains shared utilities (fs, etc.)
mod core; // Core infrastructure (errors, config, pipeline)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "mkfile",
    about = "📄 MkFile ✍️: Batch File Creation & Conflict Resolution",
    long_about = "Create files and their parent directories in one go.\n\
                  Conflicts with existing files are resolved by policy (create/force/append),\n\
                  and a failing path never stops the rest of the batch.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(flatten)]
    create: commands::create::CreateArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Log errors only.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    // Use anyhow::Result directly
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    match commands::create::handle_create(cli.create) {
        Ok(summary) => {
            if !summary.all_succeeded() {
                // Per-path failures were already reported individually.
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
