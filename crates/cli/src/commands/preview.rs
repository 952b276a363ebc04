// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use taster_core::gherkin::{parse, GherkinScenario, GherkinStep, ParsedFeature, Table};

use super::read_source;
use crate::cli::OutputFormat;
use crate::colors;
use crate::error::Result;

/// Printed when the document cannot be parsed. Not an error: the reviewer
/// simply gets no preview.
pub(crate) const NO_PREVIEW: &str = "no preview: the document could not be parsed";

pub fn run(file: &Path, output: OutputFormat) -> Result<()> {
    let source = read_source(file)?;
    let parsed = parse(&source.content);
    if parsed.is_none() {
        tracing::info!(source = %source.name, "no preview available");
    }

    match output {
        OutputFormat::Text => match &parsed {
            Some(feature) => print!("{}", format_feature(feature)),
            None => println!("{NO_PREVIEW}"),
        },
        // `null` when absent, so consumers can tell "no preview" from an error.
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
    }
    Ok(())
}

pub(crate) fn format_feature(parsed: &ParsedFeature) -> String {
    let feature = &parsed.feature;
    let mut out = String::new();

    if !feature.tags.is_empty() {
        out.push_str(&colors::context(&feature.tags.join(" ")));
        out.push('\n');
    }
    out.push_str(&format!(
        "{} {}\n",
        colors::header("Feature:"),
        feature.name
    ));
    if let Some(description) = &feature.description {
        push_indented(&mut out, description, 2);
    }

    for scenario in &parsed.scenarios {
        out.push('\n');
        format_scenario(&mut out, scenario);
    }
    out
}

fn format_scenario(out: &mut String, scenario: &GherkinScenario) {
    out.push_str(&format!(
        "  {} {}\n",
        colors::header(&format!("{}:", scenario.keyword)),
        scenario.name
    ));
    if let Some(description) = &scenario.description {
        push_indented(out, description, 4);
    }
    for step in &scenario.steps {
        format_step(out, step);
    }
    if let Some(examples) = &scenario.examples {
        out.push_str(&format!("    {}\n", colors::header("Examples:")));
        push_table(out, examples, 6);
    }
}

fn format_step(out: &mut String, step: &GherkinStep) {
    out.push_str(&format!(
        "    {} {}\n",
        colors::literal(&step.keyword),
        step.text
    ));
    if let Some(doc_string) = &step.doc_string {
        out.push_str("      \"\"\"\n");
        push_indented(out, doc_string, 6);
        out.push_str("      \"\"\"\n");
    }
    if let Some(table) = &step.data_table {
        push_table(out, table, 6);
    }
}

fn push_indented(out: &mut String, text: &str, indent: usize) {
    for line in text.lines() {
        if line.trim().is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("{:indent$}{line}\n", ""));
        }
    }
}

/// Renders a table with every column padded to its widest cell.
pub(crate) fn push_table(out: &mut String, table: &Table, indent: usize) {
    let columns = table.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            table
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in table {
        out.push_str(&format!("{:indent$}|", ""));
        for (col, width) in widths.iter().enumerate() {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            out.push_str(&format!(" {cell:<width$} |"));
        }
        out.push('\n');
    }
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
