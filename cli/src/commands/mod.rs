//! # MkFile Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module aggregates the command handlers that comprise the MkFile CLI.
//! It serves as the central point for importing and re-exporting command
//! modules to make them accessible to the main application entry point
//! (`main.rs`).
//!
//! ## Architecture
//!
//! MkFile currently exposes a single command surface:
//! - `create`: the file creation pipeline: argument definitions, content
//!   collection, batch execution, and reporting
//!
//! The command defines its own arguments structure (`CreateArgs`) and a
//! handler function (`handle_create`) that `main.rs` routes into.
//!

/// The file creation command: argument surface, interactive content
/// collection, batch execution, and result reporting.
pub mod create;
