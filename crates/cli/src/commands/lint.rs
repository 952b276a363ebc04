// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use std::path::Path;

use taster_core::gherkin::validate_business_rules;

use super::read_source;
use crate::cli::OutputFormat;
use crate::colors;
use crate::error::{Error, Result};

#[derive(Serialize)]
struct LintReport<'a> {
    source: &'a str,
    violations: &'a [String],
}

pub fn run(file: &Path, output: OutputFormat) -> Result<()> {
    let source = read_source(file)?;
    let violations = validate_business_rules(&source.content);

    match output {
        OutputFormat::Text => print!("{}", format_text(&source.name, &violations)),
        OutputFormat::Json => {
            let report = LintReport {
                source: &source.name,
                violations: &violations,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::RuleViolations {
            source_name: source.name,
            count: violations.len(),
        })
    }
}

pub(crate) fn format_text(name: &str, violations: &[String]) -> String {
    if violations.is_empty() {
        return format!("{name}: {}\n", colors::ok("no violations"));
    }
    let mut out = String::new();
    for violation in violations {
        out.push_str(&format!("{name}: {}\n", colors::error(violation)));
    }
    out
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
