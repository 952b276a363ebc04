// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use std::path::Path;

use taster_core::gherkin::{validate_business_rules, validate_gherkin, ValidationResult};

use super::{read_source, Source};
use crate::cli::OutputFormat;
use crate::colors;
use crate::error::{Error, Result};

#[derive(Debug, Serialize)]
pub(crate) struct CheckReport {
    source: String,
    syntax: ValidationResult,
    violations: Vec<String>,
}

impl CheckReport {
    pub(crate) fn build(source: &Source) -> Self {
        CheckReport {
            source: source.name.clone(),
            syntax: validate_gherkin(&source.content),
            violations: validate_business_rules(&source.content),
        }
    }

    /// Syntax errors always fail; rule violations fail only in strict mode.
    pub(crate) fn verdict(&self, strict: bool) -> Result<()> {
        if let Some(error) = self.syntax.first_error() {
            return Err(Error::InvalidSyntax {
                source_name: self.source.clone(),
                line: error.line,
                message: error.message.clone(),
            });
        }
        if strict && !self.violations.is_empty() {
            return Err(Error::RuleViolations {
                source_name: self.source.clone(),
                count: self.violations.len(),
            });
        }
        Ok(())
    }
}

pub fn run(file: &Path, strict: bool, output: OutputFormat) -> Result<()> {
    let source = read_source(file)?;
    let report = CheckReport::build(&source);
    tracing::debug!(
        source = %report.source,
        valid = report.syntax.is_valid,
        violations = report.violations.len(),
        "checked"
    );

    match output {
        OutputFormat::Text => print!("{}", format_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    report.verdict(strict)
}

pub(crate) fn format_text(report: &CheckReport) -> String {
    let mut out = String::new();
    let syntax = &report.syntax;

    if syntax.is_valid {
        out.push_str(&format!(
            "{}: {} ({} scenario(s), {} step(s))\n",
            report.source,
            colors::ok("valid"),
            syntax.scenario_count,
            syntax.step_count
        ));
    } else {
        out.push_str(&format!("{}: {}\n", report.source, colors::error("invalid")));
        for error in &syntax.errors {
            out.push_str(&format!(
                "  {}:{}: {}\n",
                error.line, error.column, error.message
            ));
        }
    }

    if report.violations.is_empty() {
        out.push_str(&format!("{} none\n", colors::header("Business rules:")));
    } else {
        out.push_str(&format!("{}\n", colors::header("Business rules:")));
        for violation in &report.violations {
            out.push_str(&format!("  - {violation}\n"));
        }
    }
    out
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
