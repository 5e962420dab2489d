//! # MkFile Content Writer
//!
//! File: cli/src/core/writer.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module opens the target file in the mode chosen by conflict
//! resolution and writes the request's content, if any. It owns the one
//! content rule of the tool: files written by MkFile always end with exactly
//! one trailing newline.
//!
//! ## Architecture
//!
//! `write_content` maps each `WriteMode` onto `std::fs::OpenOptions`:
//! - `WriteNew` uses `create_new`, so a file appearing between the conflict
//!   check and the open fails with the OS `AlreadyExists` error instead of
//!   silently clobbering it.
//! - `Overwrite` uses `create` + `truncate`.
//! - `Append` opens append-only without `create`; an appended-to file that
//!   vanished since the check is an I/O failure, not a silent re-create.
//!
//! Writes go straight to the target. There is no write-to-temp-then-rename
//! step, so a failure mid-write can leave a partial file behind; callers get
//! the raw `io::Error` and classify it per path.
//!
use crate::core::conflict::WriteMode;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Open `path` in the given mode and write `content`, if any.
///
/// Content that does not already end with a newline gets exactly one `'\n'`
/// appended. Absent or empty content writes no bytes: in `WriteNew` mode that
/// produces an empty file, in `Overwrite` mode an emptied one, and in
/// `Append` mode it leaves the file as it was.
pub fn write_content(path: &Path, mode: WriteMode, content: Option<&str>) -> io::Result<()> {
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::WriteNew => options.write(true).create_new(true),
        WriteMode::Overwrite => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true),
    };

    debug!("Opening {:?} with mode {:?}", path, mode);
    let mut file = options.open(path)?;

    if let Some(text) = content {
        if !text.is_empty() {
            file.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                file.write_all(b"\n")?;
            }
        }
    }

    info!("Wrote {:?} ({:?})", path, mode);
    Ok(())
}
