// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed view of a Gherkin feature file.
//!
//! These are plain values rebuilt on every parse. Tables are rows of cells in
//! source order with the header as the first row.

use serde::{Deserialize, Serialize};

/// A table of string cells; the first row is the header.
pub type Table = Vec<Vec<String>>;

/// A single Given/When/Then/And/But step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GherkinStep {
    /// Step keyword without trailing whitespace (e.g. "Given").
    pub keyword: String,
    pub text: String,
    /// Literal multi-line block attached to the step.
    pub doc_string: Option<String>,
    pub data_table: Option<Table>,
}

impl GherkinStep {
    pub fn has_doc_string(&self) -> bool {
        self.doc_string.is_some()
    }
}

/// A scenario or scenario outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GherkinScenario {
    /// "Scenario", "Scenario Outline", or a localized equivalent.
    pub keyword: String,
    pub name: String,
    pub description: Option<String>,
    pub steps: Vec<GherkinStep>,
    /// Examples of an outline as one table: header row, then data rows.
    pub examples: Option<Table>,
}

impl GherkinScenario {
    /// Returns true if the scenario carries an Examples table.
    pub fn is_outline(&self) -> bool {
        self.examples.is_some()
    }
}

/// Feature header: name, description and tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GherkinFeature {
    pub name: String,
    pub description: Option<String>,
    /// Tags in source order, including the leading `@`.
    pub tags: Vec<String>,
}

impl GherkinFeature {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A well-formed feature document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFeature {
    pub feature: GherkinFeature,
    pub scenarios: Vec<GherkinScenario>,
}

impl ParsedFeature {
    /// Total number of steps across all scenarios, outlines unexpanded.
    pub fn step_count(&self) -> usize {
        self.scenarios.iter().map(|s| s.steps.len()).sum()
    }
}

/// A syntax error located in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// 1-based line; 1 when the engine gave no usable location.
    pub line: usize,
    /// Column; usually 0.
    pub column: usize,
    pub message: String,
}

/// Outcome of a syntax check.
///
/// Counts are over compiled pickles: an outline with N example rows counts as
/// N scenarios. Both counts are 0 when the document is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub scenario_count: usize,
    pub step_count: usize,
}

impl ValidationResult {
    pub(crate) fn valid(scenario_count: usize, step_count: usize) -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            scenario_count,
            step_count,
        }
    }

    pub(crate) fn invalid(error: ValidationError) -> Self {
        ValidationResult {
            is_valid: false,
            errors: vec![error],
            scenario_count: 0,
            step_count: 0,
        }
    }

    /// The first reported error, if any.
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }
}
