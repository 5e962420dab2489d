//! # MkFile Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module centralizes the directory-creation side of the pipeline:
//! making sure a target file's ancestor directories exist before anything is
//! opened for writing.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Checks whether a directory exists at the given
//!   path. If not, it creates the directory including any missing parents
//!   (`fs::create_dir_all`). Idempotent: an already-existing directory is a
//!   logged no-op, not an error.
//!
//! Unlike most of the application, these functions return raw
//! `std::io::Result` instead of `anyhow::Result`. The batch runner needs the
//! underlying `io::ErrorKind` to classify each failure into the per-path
//! error taxonomy, and a context-wrapped error would bury it.
//!
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function attempts to create the
/// directory, including any necessary parent directories (similar to
/// `mkdir -p`). A path that already exists as a non-directory is left for
/// `create_dir_all` to reject with the OS error.
pub fn ensure_dir_exists(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        debug!("Directory already exists: {:?}", path);
        return Ok(());
    }
    fs::create_dir_all(path)?;
    info!("Created directory: {:?}", path);
    Ok(())
}
