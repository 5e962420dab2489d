//! # MkFile Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module acts as the primary interface and organizational unit for the
//! filesystem-related utility functions within the MkFile CLI. It aggregates
//! functionality from specialized submodules, providing a consistent entry
//! point for path normalization and directory manipulation.
//!
//! ## Architecture
//!
//! Functionality is delegated to the following submodules:
//!
//! - **`io`**: Directory creation (`ensure_dir_exists`), used by the batch
//!   runner before every write so missing ancestors never fail a path for
//!   the wrong reason.
//! - **`resolve`**: Path normalization (`resolve_path`): tilde expansion and
//!   absolutization of user-supplied path strings.
//!
//! Callers import from the specific submodule, e.g.
//! `crate::common::fs::resolve::resolve_path`.
//!

/// Contains basic file I/O operations (e.g., `ensure_dir_exists`).
pub mod io;
/// Contains path normalization helpers (e.g., `resolve_path`).
pub mod resolve;
