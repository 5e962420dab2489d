//! # MkFile Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the MkFile application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of three main components:
//! - `ErrorKind`: A closed, per-path error taxonomy. Every failure that occurs
//!   while processing a single target path is classified into exactly one of
//!   these kinds and carried inside that path's `CreateResult`; it never
//!   aborts the rest of the batch.
//! - `MkfileError`: A custom error enum using `thiserror` for application-level
//!   errors (configuration problems, argument validation) that abort the whole
//!   invocation before any path is touched.
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!   at the application level.
//!
//! ## Examples
//!
//! Classifying an OS error during a write:
//!
//! ```rust
//! // let kind = ErrorKind::from_write_error(&io_err);
//! // results.push(CreateResult::failure(path, kind));
//! ```
//!
//! Returning an application-level error:
//!
//! ```rust
//! // anyhow::bail!(MkfileError::Config("invalid policy name".into()));
//! ```
//!
use std::io;
use thiserror::Error;

/// Per-path error taxonomy for the file creation pipeline.
///
/// This is a closed set: every OS-level failure encountered while processing
/// one target path maps to exactly one kind, so callers can match on it
/// exhaustively. The kinds are values attached to a `CreateResult`, not
/// exceptions, and they never propagate past the batch runner.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The target is an existing regular file and the policy is `Create`.
    #[error("file already exists (use --force to overwrite or --append to add to it)")]
    AlreadyExists,

    /// The target path names a directory. Not overridable by any policy.
    #[error("path is a directory")]
    PathIsDirectory,

    /// The OS denied directory creation or the file open/write.
    #[error("permission denied")]
    PermissionDenied,

    /// Any other OS-level failure during directory creation or write.
    #[error("I/O failure")]
    IoFailure,
}

impl ErrorKind {
    /// Classify an OS error raised while creating ancestor directories.
    ///
    /// Directory creation can only fail with `PermissionDenied` or some other
    /// OS-level problem; an "already exists" outcome is a no-op upstream and
    /// never reaches classification.
    pub fn from_mkdir_error(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailure,
        }
    }

    /// Classify an OS error raised while opening or writing the target file.
    ///
    /// `AlreadyExists` surfaces here when `create_new` loses the race against
    /// a concurrent writer that created the file after the conflict check.
    pub fn from_write_error(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
            _ => ErrorKind::IoFailure,
        }
    }
}

/// Custom error type for application-level failures in MkFile.
///
/// These abort the whole invocation (bad configuration, unusable arguments),
/// unlike `ErrorKind` values which are confined to a single path's result.
#[derive(Error, Debug)]
pub enum MkfileError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
