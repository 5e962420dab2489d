//! # MkFile Interactive Content Prompt
//!
//! File: cli/src/commands/create/prompt.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Interactive collection of file content from stdin, one prompt per target
//! path. This runs entirely before the batch pipeline starts: the core only
//! ever sees requests whose content is already decided.
//!
//! Input ends with a line containing a single `.` or with EOF. Ending the
//! input immediately (no lines) yields no content, which the pipeline turns
//! into an empty file.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::{self, BufRead, Write};

/// Prompt for the content of one target path.
///
/// Returns `None` when the user supplies no lines at all, `Some(text)`
/// otherwise. Lines are rejoined with `\n`; the writer takes care of the
/// final trailing newline.
pub fn read_content(path: &str) -> Result<Option<String>> {
    println!("Content for {} (end with a single '.' line or EOF):", path);
    io::stdout().flush().context("Failed to flush stdout")?;

    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read content from stdin")?;
        if line == "." {
            break;
        }
        lines.push(line);
    }

    if lines.is_empty() {
        Ok(None)
    } else {
        Ok(Some(lines.join("\n")))
    }
}
