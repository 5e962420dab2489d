//! # MkFile Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module implements the configuration system for MkFile, handling
//! loading, merging, and access to configuration data. It supports a
//! multi-level configuration approach that combines defaults, user settings,
//! and project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.mkfile.toml` in the current directory or ancestors
//!    (the search stops at a `.git` boundary)
//! 2. User-specific `~/.config/mkfile/config.toml`
//! 3. Default values defined in the code
//!
//! Command-line flags always win over everything loaded here; the merge in
//! this module only decides what applies when a flag is absent.
//!
//! ## Examples
//!
//! ```toml
//! # .mkfile.toml
//! [defaults]
//! policy = "force"
//! skip_existing = false
//! ```
//!
//! ```rust
//! // let cfg = config::load_config()?;
//! // let policy = cfg.defaults.policy.unwrap_or_default();
//! ```
//!
use crate::core::error::Result;
use crate::core::request::WritePolicy;
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    // Add other top-level configuration sections here
}

/// Default request settings applied when the corresponding flag is absent.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Conflict policy to use when neither `--force` nor `--append` is given.
    #[serde(default)]
    pub policy: Option<WritePolicy>,
    /// Whether existing files are skipped (instead of failing) by default.
    #[serde(default)]
    pub skip_existing: Option<bool>,
}

const PROJECT_CONFIG_FILENAME: &str = ".mkfile.toml";

/// Load, merge, and return the effective configuration.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "MkFile", "mkfile") {
        let config_dir = proj_dirs.config_dir();
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.mkfile.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if project_config.exists() && project_config.is_file() {
            return Ok(Some(project_config));
        }
        if git_dir.exists() && git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.defaults.policy = project_cfg.defaults.policy.or(user.defaults.policy);
    merged.defaults.skip_existing = project_cfg
        .defaults
        .skip_existing
        .or(user.defaults.skip_existing);
    merged
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [defaults]
            policy = "force"
            skip_existing = true
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");
        assert_eq!(config.defaults.policy, Some(WritePolicy::Force));
        assert_eq!(config.defaults.skip_existing, Some(true));
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").expect("Failed to parse TOML");
        assert_eq!(config.defaults.policy, None);
        assert_eq!(config.defaults.skip_existing, None);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let toml_content = r#"
            [defaults]
            polcy = "force"
        "#;
        assert!(toml::from_str::<Config>(toml_content).is_err());
    }

    #[test]
    fn test_project_config_overrides_user() {
        let user: Config = toml::from_str(
            r#"
            [defaults]
            policy = "append"
            skip_existing = true
        "#,
        )
        .unwrap();
        let project: Config = toml::from_str(
            r#"
            [defaults]
            policy = "force"
        "#,
        )
        .unwrap();

        let merged = merge_configs(user, Some(project));
        // Project wins where it speaks; user fills the gaps.
        assert_eq!(merged.defaults.policy, Some(WritePolicy::Force));
        assert_eq!(merged.defaults.skip_existing, Some(true));
    }

    #[test]
    fn test_no_project_config_keeps_user() {
        let user: Config = toml::from_str(
            r#"
            [defaults]
            policy = "append"
        "#,
        )
        .unwrap();
        let merged = merge_configs(user, None);
        assert_eq!(merged.defaults.policy, Some(WritePolicy::Append));
    }
}
