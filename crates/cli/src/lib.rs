// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tasterrs - command-line front end for Gherkin review.
//!
//! This crate provides the `taster` CLI over [`taster_core`]: syntax checks,
//! house-style lint, feature previews and approval dry runs for reviewers and
//! CI.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`Config`] - `taster.toml` loading and discovery
//! - [`Error`] - error types for all commands

mod cli;
pub mod colors;
mod commands;
pub mod env;
pub mod help;
mod logging;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_config, init_config, Config};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    let config = Config::discover()?;
    logging::init(&config);

    match command {
        Command::Check {
            file,
            strict,
            output,
        } => commands::check::run(&file, strict, output),
        Command::Preview { file, output } => commands::preview::run(&file, output),
        Command::Lint { file, output } => commands::lint::run(&file, output),
        Command::Plan {
            issue,
            title,
            path,
            file,
            output,
        } => commands::plan::run(&config, &issue, &title, path.as_deref(), &file, output),
        Command::Init { path } => commands::init::run(path),
    }
}
