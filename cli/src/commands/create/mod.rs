//! # MkFile Create Command
//!
//! File: cli/src/commands/create/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module implements the file creation command, the whole visible
//! surface of the `mkfile` binary. It handles:
//! - Parsing the command-line arguments for target paths and policy flags
//! - Loading configuration and resolving flag/config precedence
//! - Collecting per-path content interactively when requested
//! - Driving the core batch pipeline over the fully-resolved requests
//! - Reporting per-path outcomes and the batch summary to the user
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load configuration (`core::config`)
//! 2. Resolve the effective policy: flags beat config, config beats the
//!    built-in `Create` default
//! 3. Build one `CreateRequest` per path, resolving content first (literal
//!    `--content`, or the interactive prompt, or none); the core never
//!    prompts
//! 4. Run the batch (`core::batch::run_batch`)
//! 5. Print one line per path plus a closing summary; the returned
//!    `BatchSummary` drives the process exit status in `main`
//!
//! ## Examples
//!
//! ```bash
//! # Create two empty files (and any missing parent directories)
//! mkfile notes/today.md logs/run.log
//!
//! # Overwrite with literal content
//! mkfile --force --content "fresh start" notes/today.md
//!
//! # Append, prompting for the text on stdin
//! mkfile --append --interactive logs/run.log
//! ```
//!
use crate::core::batch;
use crate::core::config;
use crate::core::error::Result;
use crate::core::request::{BatchSummary, CreateRequest, WritePolicy};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

mod prompt;

/// # Create Arguments (`CreateArgs`)
///
/// Defines the command-line arguments accepted by the `mkfile` binary.
/// Uses the `clap` crate for parsing and validation.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// One or more target file paths. `~` is expanded; relative paths are
    /// resolved against the current directory; missing parent directories
    /// are created.
    #[arg(required = true, value_name = "PATHS")]
    paths: Vec<String>,

    /// Overwrite a target that already exists as a file.
    #[arg(long, short = 'f', conflicts_with = "append")]
    force: bool,

    /// Append to a target that already exists as a file.
    #[arg(long, short = 'a')]
    append: bool,

    /// Skip (rather than fail on) targets that already exist as files.
    /// Directories are still rejected.
    #[arg(long)]
    skip_existing: bool,

    /// Literal content to write to every target. A trailing newline is
    /// added if the content does not end with one.
    #[arg(long, short = 'c', conflicts_with = "interactive")]
    content: Option<String>,

    /// Prompt on stdin for each target's content (end with a lone `.` or
    /// EOF; ending immediately creates an empty file).
    #[arg(long, short = 'i')]
    interactive: bool,
}

/// # Handle Create Command (`handle_create`)
///
/// The main handler function for the `mkfile` command. Builds one
/// fully-resolved request per path, runs the batch pipeline, and reports the
/// outcomes. Per-path failures live inside the returned summary; only
/// setup problems (configuration, stdin) surface as an `Err` here.
///
/// ## Arguments
/// * `args` - The parsed `CreateArgs` containing all command-line options.
///
/// ## Returns
/// * `Result<BatchSummary>` - The batch outcome; `main` derives the exit
///   status from it.
pub fn handle_create(args: CreateArgs) -> Result<BatchSummary> {
    info!("Handling create command for {} path(s)...", args.paths.len());

    let cfg = config::load_config().context("Failed to load MkFile configuration")?;

    let policy = effective_policy(&args, cfg.defaults.policy);
    let skip_existing = args.skip_existing || cfg.defaults.skip_existing.unwrap_or(false);
    debug!(
        "Effective policy {:?}, skip_existing {}",
        policy, skip_existing
    );

    let requests = build_requests(&args, policy, skip_existing)
        .context("Failed to collect content for the requested paths")?;

    let summary = batch::run_batch(&requests);
    report_results(&summary);
    Ok(summary)
}

/// Resolve the policy for this invocation: explicit flags win over the
/// configured default, which wins over plain `Create`.
fn effective_policy(args: &CreateArgs, configured: Option<WritePolicy>) -> WritePolicy {
    if args.force {
        WritePolicy::Force
    } else if args.append {
        WritePolicy::Append
    } else {
        configured.unwrap_or_default()
    }
}

/// Build one fully-resolved request per target path.
///
/// Content resolution happens here, before the batch starts: the literal
/// `--content` value applies to every path, while `--interactive` prompts
/// once per path. The core pipeline itself never blocks on user input.
fn build_requests(
    args: &CreateArgs,
    policy: WritePolicy,
    skip_existing: bool,
) -> Result<Vec<CreateRequest>> {
    let mut requests = Vec::with_capacity(args.paths.len());
    for path in &args.paths {
        let content = if args.interactive {
            prompt::read_content(path)?
        } else {
            args.content.clone()
        };
        let mut request =
            CreateRequest::new(path.clone(), policy).with_skip_existing(skip_existing);
        if let Some(content) = content {
            request = request.with_content(content);
        }
        requests.push(request);
    }
    Ok(requests)
}

/// Print one line per path, then the closing summary.
///
/// Successes go to stdout (`Created/Overwrote/Appended/Skipped <path>`),
/// failures to stderr with the classified kind. The summary line always
/// reports succeeded vs. total so a partial failure is visible at a glance.
fn report_results(summary: &BatchSummary) {
    for result in &summary.results {
        match &result.outcome {
            Ok(action) => println!("{}: {}", action.label(), result.path.display()),
            Err(kind) => eprintln!("mkfile: {}: {}", result.path.display(), kind),
        }
    }

    if summary.all_succeeded() {
        println!("\n✅ {} of {} paths succeeded", summary.succeeded, summary.total);
    } else {
        println!(
            "\n⚠️ {} of {} paths succeeded ({} failed)",
            summary.succeeded,
            summary.total,
            summary.total - summary.succeeded
        );
    }
}
