//! # MkFile Batch Runner
//!
//! File: cli/src/core/batch.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module drives the full creation pipeline over an ordered list of
//! requests and aggregates the per-path outcomes into a `BatchSummary`. Its
//! defining property is graceful partial failure: a failure on one path
//! never prevents the remaining paths from being attempted.
//!
//! ## Architecture
//!
//! Per request, strictly in input order and to completion before the next:
//!
//! 1. **Resolve**: normalize the raw path (`common::fs::resolve`).
//! 2. **CheckConflict**: probe the target state and apply the policy
//!    decision table (`core::conflict`). Rejections and skips terminate the
//!    path here.
//! 3. **EnsureDirectory**: create missing ancestors (`common::fs::io`).
//! 4. **Write**: open in the resolved mode and write content
//!    (`core::writer`).
//!
//! Every OS failure is classified into the `ErrorKind` taxonomy at the point
//! of occurrence and becomes that path's result; nothing propagates out of
//! `run_batch` as an `Err`. Processing is single-threaded and synchronous;
//! the only shared state across iterations is the append-only result list.
//!
use crate::common::fs::{io, resolve};
use crate::core::conflict::{self, Decision, WriteMode};
use crate::core::error::ErrorKind;
use crate::core::request::{BatchSummary, CreateAction, CreateRequest, CreateResult};
use crate::core::writer;
use tracing::{debug, warn};

/// Run the creation pipeline over every request, in order.
///
/// Returns a summary holding one `CreateResult` per request, in the same
/// order. The summary is built fresh for this call and not mutated after
/// being returned.
pub fn run_batch(requests: &[CreateRequest]) -> BatchSummary {
    let mut results = Vec::with_capacity(requests.len());
    for request in requests {
        let result = process_request(request);
        if let Err(kind) = &result.outcome {
            warn!("Failed {:?}: {}", result.path, kind);
        }
        results.push(result);
    }
    BatchSummary::from_results(results)
}

/// Execute the pipeline for a single request to its terminal result.
fn process_request(request: &CreateRequest) -> CreateResult {
    let target = resolve::resolve_path(&request.path);
    debug!(
        "Processing {:?} (policy {:?}, skip_existing {})",
        target, request.policy, request.skip_existing
    );

    // State is probed fresh here, never carried over from an earlier attempt.
    let state = conflict::probe_target_state(&target);
    let mode = match conflict::resolve(state, request.policy, request.skip_existing) {
        Err(kind) => return CreateResult::failure(target, kind),
        Ok(Decision::Skip) => return CreateResult::success(target, CreateAction::Skipped),
        Ok(Decision::Write(mode)) => mode,
    };

    if let Some(parent) = target.parent() {
        if let Err(err) = io::ensure_dir_exists(parent) {
            return CreateResult::failure(target, ErrorKind::from_mkdir_error(&err));
        }
    }

    match writer::write_content(&target, mode, request.content.as_deref()) {
        Ok(()) => CreateResult::success(target, action_for_mode(mode)),
        Err(err) => CreateResult::failure(target, ErrorKind::from_write_error(&err)),
    }
}

/// Map the write mode actually used onto the reported action.
fn action_for_mode(mode: WriteMode) -> CreateAction {
    match mode {
        WriteMode::WriteNew => CreateAction::Created,
        WriteMode::Overwrite => CreateAction::Overwritten,
        WriteMode::Append => CreateAction::AppendedTo,
    }
}
