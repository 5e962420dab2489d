//! # MkFile Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for shared,
//! common utility modules used throughout the MkFile CLI application.
//! Centralizing these utilities under the `common::` namespace keeps a clear
//! separation between command-specific logic (`commands::`) and core
//! infrastructure (`core::`).
//!
//! ## Architecture
//!
//! The `common` module itself primarily consists of declarations (`pub mod`)
//! for its submodules:
//!
//! - **`fs`**: Foundational filesystem operations: normalizing user-supplied
//!   paths and ensuring directories exist. Includes `io` and `resolve`.
//!
//! ## Usage
//!
//! Command handlers and the core pipeline import specific functionality
//! directly from the required submodule within `common`.
//!
//! ```rust
//! // use crate::common::fs;
//! // fs::io::ensure_dir_exists(log_dir)?;
//! // let target = fs::resolve::resolve_path("~/notes/today.txt");
//! ```
//!

/// Utilities for filesystem operations (path resolution, directory creation).
pub mod fs;
