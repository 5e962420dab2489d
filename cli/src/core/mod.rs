//! # MkFile Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module aggregates the core components of the MkFile application: the
//! configuration and error infrastructure, the request/result data model,
//! and the file creation pipeline itself.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading and merging
//! - `error`: Error types, the per-path error taxonomy, and handling utilities
//! - `request`: The `CreateRequest`/`CreateResult`/`BatchSummary` data model
//! - `conflict`: Target-state probing and the policy decision table
//! - `writer`: Opening targets in the resolved mode and writing content
//! - `batch`: The sequential, partial-failure-tolerant batch runner
//!
//! ## Usage
//!
//! Command handlers drive the pipeline through `batch::run_batch` and only
//! touch the lower modules for types:
//!
//! ```rust
//! // use crate::core::batch;
//! // use crate::core::request::{CreateRequest, WritePolicy};
//! //
//! // let requests = vec![CreateRequest::new("notes.txt", WritePolicy::Create)];
//! // let summary = batch::run_batch(&requests);
//! ```
//!
pub mod batch;
pub mod config;
pub mod conflict;
pub mod error;
pub mod request;
pub mod writer;
