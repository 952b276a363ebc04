// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log output for the CLI. Everything goes to stderr so stdout carries only
//! command output.

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::env;

/// Filter used when neither `TASTER_LOG` nor the config yields a valid one.
const FALLBACK_DIRECTIVE: &str = "warn";

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(config: &Config) {
    let filter = build_filter(env::log_filter(), &config.log_level);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `TASTER_LOG` wins over the config level; an unparsable directive falls
/// through to the next source.
fn build_filter(env_directive: Option<String>, config_level: &str) -> EnvFilter {
    env_directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(config_level).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_DIRECTIVE))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
