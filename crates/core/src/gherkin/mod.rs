// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gherkin feature files: structural parsing, syntax validation and the
//! house-style business rules.
//!
//! All three entry points take raw UTF-8 text and do no I/O:
//!
//! - [`parse`] builds a [`ParsedFeature`] for previews, or `None`.
//! - [`validate_gherkin`] checks syntax and counts compiled scenarios.
//! - [`validate_business_rules`] lists house-style violations.

mod engine;
pub mod model;
mod parse;
mod rules;
mod validate;

pub use model::{
    GherkinFeature, GherkinScenario, GherkinStep, ParsedFeature, Table, ValidationError,
    ValidationResult,
};
pub use parse::parse;
pub use rules::{
    validate_business_rules, COMMENTED_SCENARIO_VIOLATION, FEATURE_DESCRIPTION_VIOLATION,
};
pub use validate::{extract_line_number, validate_gherkin};
