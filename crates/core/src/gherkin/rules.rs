// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! House-style lint for reviewer-facing feature files.
//!
//! The rules are textual: they match literal substrings of the raw text
//! rather than walking the parsed tree, so they run on invalid documents too.
//! `Scenario Outline:` is not matched by the `Scenario:` rules.

pub const FEATURE_DESCRIPTION_VIOLATION: &str =
    "Feature must include a description explaining business value";
pub const COMMENTED_SCENARIO_VIOLATION: &str =
    "Commented-out scenarios detected - remove or complete before approval";

const FEATURE_KEYWORD: &str = "Feature:";
const SCENARIO_KEYWORD: &str = "Scenario:";

/// Runs every business rule and returns the violations in rule order.
///
/// An empty list means the text passes. Violations are advisory and never
/// block validation or approval.
pub fn validate_business_rules(content: &str) -> Vec<String> {
    let mut violations = Vec::new();
    violations.extend(feature_has_description(content));
    violations.extend(scenarios_have_given(content));
    violations.extend(no_commented_scenarios(content));
    violations
}

/// The feature block, up to the first `Scenario:`, must span at least three
/// lines: the keyword line, a separator and the description.
fn feature_has_description(content: &str) -> Option<String> {
    let start = content.find(FEATURE_KEYWORD)?;
    let rest = &content[start..];
    let section = match rest.find(SCENARIO_KEYWORD) {
        Some(end) => &rest[..end],
        None => rest,
    };

    if section.split('\n').count() < 3 {
        Some(FEATURE_DESCRIPTION_VIOLATION.to_string())
    } else {
        None
    }
}

/// Every text segment following a `Scenario:` keyword must mention `Given`.
fn scenarios_have_given(content: &str) -> Vec<String> {
    content
        .split(SCENARIO_KEYWORD)
        .skip(1)
        .enumerate()
        .filter(|(_, segment)| !segment.contains("Given"))
        .map(|(idx, _)| {
            format!(
                "Scenario {} must include at least one Given step (preconditions)",
                idx + 1
            )
        })
        .collect()
}

/// Reported once, however many scenarios are commented out.
fn no_commented_scenarios(content: &str) -> Option<String> {
    if content.contains("#Scenario:") || content.contains("# Scenario:") {
        Some(COMMENTED_SCENARIO_VIOLATION.to_string())
    } else {
        None
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
