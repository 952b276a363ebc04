// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use thiserror::Error;

/// All errors the taster CLI reports.
///
/// `main` prints the message prefixed with `error:` and exits 1, so failed
/// checks share the exit path with real failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{source_name}: invalid Gherkin syntax at line {line}: {message}")]
    InvalidSyntax {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("{source_name}: {count} business rule violation(s)")]
    RuleViolations { source_name: String, count: usize },

    #[error("config already exists at {}\n  hint: edit it or remove it first", .0.display())]
    ConfigExists(PathBuf),

    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for tasterrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
