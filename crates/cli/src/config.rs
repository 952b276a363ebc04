// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reviewer configuration.
//!
//! Configuration is stored in `taster.toml`, found by walking up from the
//! working directory (or named by `TASTER_CONFIG`), and includes:
//! - `log_level`: default log filter when `TASTER_LOG` is unset
//! - `[approval]`: repository, base branch, features directory and commit author
//! - `[llm]`: API key reserved for generated commit messages

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use taster_core::Author;

use crate::env;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "taster.toml";

/// Project configuration stored in `taster.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter directive (e.g. "warn", "taster_core=debug").
    pub log_level: String,
    pub approval: ApprovalConfig,
    pub llm: LlmConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            approval: ApprovalConfig::default(),
            llm: LlmConfig::default(),
        }
    }
}

/// Where approved features go and who commits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalConfig {
    /// Repository in host notation (e.g. "org/repo").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    pub base_branch: String,
    /// Directory for feature files of issues that record no path.
    pub features_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        ApprovalConfig {
            repo: None,
            base_branch: "main".to_string(),
            features_dir: "features".to_string(),
            author_name: None,
            author_email: None,
        }
    }
}

impl ApprovalConfig {
    /// Commit author, when both name and email are configured.
    pub fn author(&self) -> Option<Author> {
        match (&self.author_name, &self.author_email) {
            (Some(name), Some(email)) => Some(Author::new(name, email)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Config {
    /// Loads configuration from a `taster.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Saves configuration to a `taster.toml` file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads the configuration for this process: `TASTER_CONFIG` if set,
    /// else the nearest `taster.toml` above the working directory, else
    /// defaults.
    pub fn discover() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::resolve(env::config_path(), &cwd)
    }

    /// [`Config::discover`] with its inputs made explicit.
    ///
    /// An explicit path must exist; a discovered one is optional.
    pub fn resolve(explicit: Option<PathBuf>, start: &Path) -> Result<Self> {
        match explicit.or_else(|| find_config(start)) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            None => Ok(Config::default()),
        }
    }

    /// LLM key, with `TASTER_LLM_API_KEY` taking precedence.
    pub fn llm_api_key(&self) -> Option<String> {
        env::llm_api_key().or_else(|| self.llm.api_key.clone())
    }
}

/// Find `taster.toml` by walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Write a default `taster.toml` into `dir`.
pub fn init_config(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(Error::ConfigExists(path));
    }
    fs::create_dir_all(dir)?;
    Config::default().save(&path)?;
    Ok(path)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
