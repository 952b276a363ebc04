// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text styling.

use crate::colors;
use clap::builder::styling::Styles;

/// clap styles matching the report palette.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    Styles::styled()
        .header(fg(colors::codes::HEADER))
        .usage(fg(colors::codes::HEADER))
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
        .invalid(fg(colors::codes::ERROR))
        .error(fg(colors::codes::ERROR))
}

/// Colors the section headers (lines ending in `:`) of an examples block.
pub fn examples(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                let indent = &line[..line.len() - trimmed.len()];
                format!("{indent}{}", colors::header(trimmed))
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shown after the main help.
pub fn quickstart() -> String {
    examples(
        "\
Get started:
  taster init                       Write a default taster.toml
  taster check login.feature        Validate syntax and house rules
  taster preview login.feature      Show the parsed feature
  taster plan --issue ENG-1 --title \"Login\" login.feature",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
