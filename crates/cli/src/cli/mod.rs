// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "taster")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate, preview and plan approval of Gherkin feature files")]
#[command(
    long_about = "Validate, preview and plan approval of Gherkin feature files.\n\n\
    Checks syntax and house-style rules before a reviewer approves a feature, and \
    shows where an approval would commit it."
)]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check Gherkin syntax and house-style rules
    #[command(after_help = help::examples("Examples:\n  \
        taster check login.feature            Fail only on syntax errors\n  \
        taster check --strict login.feature   Also fail on rule violations\n  \
        cat login.feature | taster check -    Read from stdin"))]
    Check {
        /// Feature file, or - for stdin
        file: PathBuf,

        /// Fail on business rule violations as well as syntax errors
        #[arg(long)]
        strict: bool,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the parsed structure of a feature file
    Preview {
        /// Feature file, or - for stdin
        file: PathBuf,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Check house-style rules only
    Lint {
        /// Feature file, or - for stdin
        file: PathBuf,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the branch, path and commit message an approval would use
    #[command(after_help = help::examples("Examples:\n  \
        taster plan --issue ENG-1 --title \"Login\" login.feature\n  \
        taster plan --issue ENG-1 --title \"Login\" --path specs/login.feature login.feature"))]
    Plan {
        /// Issue identifier (e.g. ENG-123)
        #[arg(long, value_parser = non_empty_string)]
        issue: String,

        /// Issue title, used when the file has no Feature line
        #[arg(long, value_parser = non_empty_string)]
        title: String,

        /// Repository path for the file (default: <features_dir>/<issue>.feature)
        #[arg(long)]
        path: Option<String>,

        /// Feature file, or - for stdin
        file: PathBuf,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Write a default taster.toml
    Init {
        /// Directory to write it in (default: current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
