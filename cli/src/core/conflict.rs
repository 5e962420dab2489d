//! # MkFile Conflict Resolution
//!
//! File: cli/src/core/conflict.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module decides what to do when a target path may already exist. It
//! probes the filesystem once for the target's current state, then applies
//! the policy decision table to pick a write mode, a skip, or a rejection.
//!
//! ## Architecture
//!
//! Two steps, both pure apart from the single metadata query:
//! - `probe_target_state`: one `fs::metadata` call classifying the target as
//!   `Absent`, `ExistsAsFile`, or `ExistsAsDirectory`. The state is computed
//!   fresh per attempt and never cached, so a batch entry always sees the
//!   filesystem as it is at its own turn.
//! - `resolve`: the decision table. Absent targets are writable under every
//!   policy; existing files depend on the policy (and the `skip_existing`
//!   softener); existing directories are rejected unconditionally.
//!
//! ## Decision Table
//!
//! | TargetState       | Create              | Force       | Append      |
//! |-------------------|---------------------|-------------|-------------|
//! | Absent            | write-new           | write-new   | write-new   |
//! | ExistsAsFile      | AlreadyExists (*)   | overwrite   | append      |
//! | ExistsAsDirectory | PathIsDirectory     | PathIsDirectory | PathIsDirectory |
//!
//! (*) becomes `Skip` when the request sets `skip_existing`.
//!
use crate::core::error::ErrorKind;
use crate::core::request::WritePolicy;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Current state of a target path, derived at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Nothing exists at the path.
    Absent,
    /// A regular file (or other non-directory object) exists at the path.
    ExistsAsFile,
    /// A directory exists at the path.
    ExistsAsDirectory,
}

/// How the content writer should open the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create a brand new file; fail if one appears in the meantime.
    WriteNew,
    /// Truncate and replace an existing file.
    Overwrite,
    /// Extend an existing file.
    Append,
}

/// Outcome of conflict resolution when the request is not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Proceed to directory creation and writing with the given mode.
    Write(WriteMode),
    /// Leave the target untouched and report `Skipped`.
    Skip,
}

/// Probe the target path's current state with a single metadata query.
///
/// Symlinks are followed, so a link to a directory reads as a directory. A
/// metadata error other than "not found" (e.g. a traverse-denied ancestor) is
/// reported as `Absent`: the state check cannot classify it reliably, and the
/// subsequent mkdir/open call will surface the real failure with the right
/// error kind.
pub fn probe_target_state(path: &Path) -> TargetState {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => TargetState::ExistsAsDirectory,
        Ok(_) => TargetState::ExistsAsFile,
        Err(err) => {
            if err.kind() != io::ErrorKind::NotFound {
                debug!(
                    "Could not stat {:?} ({}); deferring to the write attempt",
                    path, err
                );
            }
            TargetState::Absent
        }
    }
}

/// Apply the policy decision table to a probed target state.
///
/// A rejection short-circuits the pipeline for this path only; the caller
/// turns the `ErrorKind` into that path's result and moves on. The directory
/// rejection is absolute: no policy or flag makes a directory writable.
pub fn resolve(
    state: TargetState,
    policy: WritePolicy,
    skip_existing: bool,
) -> Result<Decision, ErrorKind> {
    let decision = match (state, policy) {
        (TargetState::Absent, _) => Ok(Decision::Write(WriteMode::WriteNew)),
        (TargetState::ExistsAsDirectory, _) => Err(ErrorKind::PathIsDirectory),
        (TargetState::ExistsAsFile, WritePolicy::Create) => {
            if skip_existing {
                Ok(Decision::Skip)
            } else {
                Err(ErrorKind::AlreadyExists)
            }
        }
        (TargetState::ExistsAsFile, WritePolicy::Force) => Ok(Decision::Write(WriteMode::Overwrite)),
        (TargetState::ExistsAsFile, WritePolicy::Append) => Ok(Decision::Write(WriteMode::Append)),
    };
    debug!(
        "Conflict resolution: state={:?} policy={:?} skip_existing={} -> {:?}",
        state, policy, skip_existing, decision
    );
    decision
}
