// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural parser backing the reviewer preview.
//!
//! [`parse`] never fails loudly: any text the grammar engine rejects yields
//! `None`, which callers treat as "no preview".

use tracing::debug;

use super::engine::parse_document;
use super::model::{GherkinFeature, GherkinScenario, GherkinStep, ParsedFeature, Table};

/// Parses feature text into a [`ParsedFeature`].
///
/// Returns `None` for empty input, text without a `Feature:` line, or any
/// other malformed document. Scenario, step and tag order follow the source.
pub fn parse(content: &str) -> Option<ParsedFeature> {
    let document = match parse_document(content) {
        Ok(document) => document,
        Err(message) => {
            debug!(error = %message, "feature text did not parse; no preview");
            return None;
        }
    };

    let feature = GherkinFeature {
        name: document.name.clone(),
        description: clean_description(document.description.as_deref()),
        tags: document.tags.iter().map(|t| surface_tag(t)).collect(),
    };

    // Rule scenarios are held apart by the engine; merge them back by line.
    let mut nodes: Vec<&::gherkin::Scenario> = document
        .scenarios
        .iter()
        .chain(document.rules.iter().flat_map(|rule| rule.scenarios.iter()))
        .collect();
    nodes.sort_by_key(|scenario| scenario.position.line);

    let scenarios = nodes.into_iter().map(convert_scenario).collect();

    Some(ParsedFeature {
        feature,
        scenarios,
    })
}

fn convert_scenario(node: &::gherkin::Scenario) -> GherkinScenario {
    GherkinScenario {
        keyword: node.keyword.trim().to_string(),
        name: node.name.clone(),
        description: clean_description(node.description.as_deref()),
        steps: node.steps.iter().map(convert_step).collect(),
        examples: examples_table(node),
    }
}

fn convert_step(node: &::gherkin::Step) -> GherkinStep {
    GherkinStep {
        keyword: node.keyword.trim().to_string(),
        text: node.value.clone(),
        doc_string: node.docstring.clone(),
        data_table: node.table.as_ref().map(|table| table.rows.clone()),
    }
}

/// The first Examples block of an outline, header row first.
fn examples_table(node: &::gherkin::Scenario) -> Option<Table> {
    let examples = node.examples.first()?;
    let table = examples.table.as_ref()?;
    if table.rows.is_empty() {
        return None;
    }
    Some(table.rows.clone())
}

/// Trims a description; blank descriptions become `None`.
pub(crate) fn clean_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

/// The engine strips the `@` sigil from tags; restore it.
fn surface_tag(tag: &str) -> String {
    if tag.starts_with('@') {
        tag.to_string()
    } else {
        format!("@{tag}")
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
