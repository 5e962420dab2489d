//! # MkFile CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! ## Overview
//!
//! This module provides shared utility functions and re-exports common crates
//! used across the integration test files (`create.rs`, etc.). This avoids
//! code duplication in the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs`
//! file in that directory (that isn't a module like this one) is compiled as
//! a separate test crate linked against the main `mkfile` binary crate.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

// Re-export common crates/modules needed by multiple test files
pub use assert_cmd::Command;
// Note: predicates and tempfile are not re-exported from here.
// Individual test files should import them directly if needed using:
// use predicates::prelude::*;
// use tempfile::tempdir; // or other tempfile items

/// # Get MkFile Command (`mkfile_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to the
/// compiled `mkfile` binary target for the current test run.
///
/// This ensures tests execute the correct binary being built.
///
/// ## Panics
/// Panics if the `mkfile` binary cannot be found via `Command::cargo_bin`.
///
/// ## Returns
/// * `Command` - An `assert_cmd::Command` ready to have arguments added and assertions run.
pub fn mkfile_cmd() -> Command {
    Command::cargo_bin("mkfile").expect("Failed to find mkfile binary for testing")
}
