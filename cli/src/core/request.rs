//! # MkFile Request & Result Model
//!
//! File: cli/src/core/request.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module defines the data types that flow through the file creation
//! pipeline: the fully-resolved `CreateRequest` supplied by callers (the CLI
//! layer, or tests), the per-path `CreateResult` the pipeline produces, and
//! the `BatchSummary` aggregating a whole invocation.
//!
//! ## Architecture
//!
//! The types are deliberately plain data:
//! - `WritePolicy`: the three-way conflict policy (`Create`/`Force`/`Append`).
//!   Serde-deserializable so the configuration layer can set a default.
//! - `CreateRequest`: one target path plus policy, optional content, and the
//!   `skip_existing` softener.
//! - `CreateAction` / `CreateResult`: the terminal outcome for one path. The
//!   "exactly one of action or error" invariant is structural: the outcome is
//!   a `Result<CreateAction, ErrorKind>`, so no state can hold both.
//! - `BatchSummary`: ordered results plus success counters, built once per
//!   batch run and immutable afterwards.
//!
use crate::core::error::ErrorKind;
use serde::Deserialize;
use std::path::PathBuf;

/// The three-way mode selector governing conflict resolution.
///
/// Exactly one policy applies to a request; `Create` is the default when
/// nothing else is specified on the command line or in configuration.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WritePolicy {
    /// Only create new files; an existing target is a conflict.
    #[default]
    Create,
    /// Replace the contents of an existing target.
    Force,
    /// Add to the end of an existing target.
    Append,
}

/// A fully-resolved request to create (or modify) one target path.
///
/// Callers resolve everything interactive or configurable *before* building
/// the request; the core pipeline never prompts and never consults config.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    /// Raw path as supplied by the caller (may contain `~`, may be relative).
    pub path: String,
    /// Conflict policy for this path.
    pub policy: WritePolicy,
    /// Content to write, if any. `None` (or empty) creates/touches without
    /// writing bytes.
    pub content: Option<String>,
    /// Soften `Create`-policy collisions on existing files into a `Skipped`
    /// action instead of an `AlreadyExists` error. Directory collisions are
    /// never softened.
    pub skip_existing: bool,
}

impl CreateRequest {
    /// Build a request with the given policy and no content.
    pub fn new(path: impl Into<String>, policy: WritePolicy) -> Self {
        Self {
            path: path.into(),
            policy,
            content: None,
            skip_existing: false,
        }
    }

    /// Attach literal content to the request.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Mark existing-file collisions as skippable for this request.
    pub fn with_skip_existing(mut self, skip: bool) -> Self {
        self.skip_existing = skip;
        self
    }
}

/// The action the pipeline took for one path, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAction {
    /// A new file was created.
    Created,
    /// An existing file's contents were replaced (`Force`).
    Overwritten,
    /// Content was added to an existing file (`Append`).
    AppendedTo,
    /// The path was left untouched (existing file + `skip_existing`, or an
    /// interactive decline).
    Skipped,
}

impl CreateAction {
    /// Past-tense label used in per-path reporting.
    pub fn label(&self) -> &'static str {
        match self {
            CreateAction::Created => "Created",
            CreateAction::Overwritten => "Overwrote",
            CreateAction::AppendedTo => "Appended",
            CreateAction::Skipped => "Skipped",
        }
    }
}

/// Terminal outcome for one target path.
///
/// Exactly one of "action taken" or "error" applies, which the `Result`
/// encoding enforces structurally.
#[derive(Debug, Clone)]
pub struct CreateResult {
    /// The resolved target path this outcome refers to.
    pub path: PathBuf,
    /// What happened: the action taken, or the classified failure.
    pub outcome: Result<CreateAction, ErrorKind>,
}

impl CreateResult {
    /// Record a successful action for `path`.
    pub fn success(path: PathBuf, action: CreateAction) -> Self {
        Self {
            path,
            outcome: Ok(action),
        }
    }

    /// Record a classified failure for `path`.
    pub fn failure(path: PathBuf, kind: ErrorKind) -> Self {
        Self {
            path,
            outcome: Err(kind),
        }
    }

    /// True when this path produced no error (includes `Skipped`).
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Aggregate outcome of one batch run.
///
/// Built fresh per invocation of the batch runner; `results` preserves the
/// input order of the requests.
#[derive(Debug)]
pub struct BatchSummary {
    /// Number of requests processed.
    pub total: usize,
    /// Number of requests that produced no error.
    pub succeeded: usize,
    /// Per-path outcomes, in input order.
    pub results: Vec<CreateResult>,
}

impl BatchSummary {
    /// Assemble a summary from an ordered result list, deriving the counters.
    pub fn from_results(results: Vec<CreateResult>) -> Self {
        let total = results.len();
        let succeeded = results.iter().filter(|r| r.is_success()).count();
        Self {
            total,
            succeeded,
            results,
        }
    }

    /// True when every path in the batch succeeded. Drives the exit status.
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}
