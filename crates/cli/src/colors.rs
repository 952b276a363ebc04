// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help and report output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Secondary detail: medium grey
    pub const CONTEXT: u8 = 245;
    /// Failures: soft red
    pub const ERROR: u8 = 167;
    /// Passing checks: sage green
    pub const OK: u8 = 108;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    decide(env::no_color(), env::force_color(), std::io::stdout().is_terminal())
}

fn decide(no_color: bool, force: bool, tty: bool) -> bool {
    if no_color {
        return false;
    }
    force || tty
}

fn paint(code: u8, text: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[38;5;{code}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text, should_colorize())
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text, should_colorize())
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text, should_colorize())
}

pub fn error(text: &str) -> String {
    paint(codes::ERROR, text, should_colorize())
}

pub fn ok(text: &str) -> String {
    paint(codes::OK, text, should_colorize())
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
