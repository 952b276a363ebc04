// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by the CLI.
//!
//! Names are generated by `build.rs` into [`vars`]; everything else goes
//! through the typed accessors below.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Log filter directive from `TASTER_LOG`, if set and non-empty.
pub fn log_filter() -> Option<String> {
    non_empty(vars::TASTER_LOG)
}

/// Explicit config file from `TASTER_CONFIG`.
pub fn config_path() -> Option<PathBuf> {
    non_empty(vars::TASTER_CONFIG).map(PathBuf::from)
}

/// LLM key from `TASTER_LLM_API_KEY`; takes precedence over the config file.
pub fn llm_api_key() -> Option<String> {
    non_empty(vars::TASTER_LLM_API_KEY)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
