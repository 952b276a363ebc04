// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax validation with pickle counting.
//!
//! A pickle is one concrete scenario after compilation: outlines expand to one
//! pickle per Examples data row, and background steps are prepended to every
//! pickle that has steps of its own.

use regex::Regex;
use std::sync::LazyLock;

use super::engine::parse_document;
use super::model::{ValidationError, ValidationResult};

static PAREN_LINE_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\((\d+):") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static WORD_LINE_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)line (\d+)") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Checks syntax and counts the compiled scenarios and steps.
///
/// Invalid text yields exactly one error with column 0, however many problems
/// the engine found.
pub fn validate_gherkin(content: &str) -> ValidationResult {
    match parse_document(content) {
        Ok(document) => {
            let count = count_pickles(&document);
            ValidationResult::valid(count.scenarios, count.steps)
        }
        Err(message) => ValidationResult::invalid(ValidationError {
            line: extract_line_number(&message),
            column: 0,
            message,
        }),
    }
}

/// Best-effort line number from an engine error message.
///
/// Tries `(<line>:` first, then `line <n>` (any case), then falls back to 1.
pub fn extract_line_number(message: &str) -> usize {
    [&*PAREN_LINE_RE, &*WORD_LINE_RE]
        .into_iter()
        .find_map(|re| re.captures(message)?.get(1)?.as_str().parse().ok())
        .unwrap_or(1)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PickleCount {
    scenarios: usize,
    steps: usize,
}

impl std::ops::AddAssign for PickleCount {
    fn add_assign(&mut self, other: Self) {
        self.scenarios += other.scenarios;
        self.steps += other.steps;
    }
}

fn count_pickles(document: &::gherkin::Feature) -> PickleCount {
    let feature_background = background_len(document.background.as_ref());
    let mut count = PickleCount::default();

    for scenario in &document.scenarios {
        count += count_scenario(scenario, feature_background);
    }
    for rule in &document.rules {
        let background = feature_background + background_len(rule.background.as_ref());
        for scenario in &rule.scenarios {
            count += count_scenario(scenario, background);
        }
    }
    count
}

fn count_scenario(scenario: &::gherkin::Scenario, background_steps: usize) -> PickleCount {
    let steps_per_pickle = if scenario.steps.is_empty() {
        0
    } else {
        background_steps + scenario.steps.len()
    };

    let pickles = if scenario.examples.is_empty() {
        1
    } else {
        scenario
            .examples
            .iter()
            .filter_map(|examples| examples.table.as_ref())
            .map(|table| table.rows.len().saturating_sub(1))
            .sum()
    };

    PickleCount {
        scenarios: pickles,
        steps: pickles * steps_per_pickle,
    }
}

fn background_len(background: Option<&::gherkin::Background>) -> usize {
    background.map_or(0, |b| b.steps.len())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
