//! # MkFile Path Resolution
//!
//! File: cli/src/common/fs/resolve.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module normalizes raw, user-supplied path strings into the absolute
//! target paths the rest of the pipeline works with. Two transformations
//! apply, in order:
//! 1. Home-directory expansion: a leading `~` is expanded to the user's home
//!    directory via `shellexpand::tilde`.
//! 2. Absolutization: a relative path is joined onto the current working
//!    directory.
//!
//! Resolution itself never fails. Paths are not canonicalized (the target
//! usually does not exist yet), and malformed paths are left for the later
//! filesystem calls to reject, which classifies them properly per path.
//!
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Resolve a raw path string to an absolute, home-expanded path.
///
/// If the current working directory cannot be determined, a relative path is
/// returned as-is and the downstream open/mkdir call reports the failure.
pub fn resolve_path(raw: &str) -> PathBuf {
    let expanded = shellexpand::tilde(raw);
    let path = PathBuf::from(expanded.as_ref());

    let resolved = if path.is_absolute() {
        path
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(err) => {
                debug!("Could not determine current directory ({}); keeping {:?} relative", err, path);
                path
            }
        }
    };
    debug!("Resolved path {:?} -> {:?}", raw, resolved);
    resolved
}
