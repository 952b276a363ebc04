// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

const CLEAN: &str = "\
Feature: User Login
  As a registered user
  I want to log into the system

  Scenario: Successful login
    Given I am on the login page
    When I enter valid credentials
    Then I should be logged in
";

#[test]
fn clean_feature_has_no_violations() {
    assert!(validate_business_rules(CLEAN).is_empty());
}

#[test]
fn feature_without_description_is_flagged() {
    let content = "\
Feature: Login
  Scenario: User logs in
    Given I am on the login page
";
    let violations = validate_business_rules(content);

    assert_eq!(violations, [FEATURE_DESCRIPTION_VIOLATION]);
}

#[test]
fn missing_given_is_flagged() {
    let violations = validate_business_rules("Feature: X\nScenario: Y\nWhen A\nThen B\n");

    assert!(violations.iter().any(|v| v.contains("Given")));
    assert!(violations
        .contains(&"Scenario 1 must include at least one Given step (preconditions)".to_string()));
}

#[test]
fn adding_given_clears_the_given_violation() {
    let violations = validate_business_rules("Feature: X\nScenario: Y\nGiven Z\nWhen A\nThen B\n");

    assert!(!violations.iter().any(|v| v.contains("Given")));
}

#[test]
fn given_violations_are_numbered_per_scenario() {
    let content = "\
Feature: Login
  As a user
  I want to login

  Scenario: Has given
    Given I am on the page
  Scenario: No given
    When I click
  Scenario: Also no given
    Then nothing
";
    let violations = validate_business_rules(content);

    assert_eq!(
        violations,
        [
            "Scenario 2 must include at least one Given step (preconditions)",
            "Scenario 3 must include at least one Given step (preconditions)",
        ]
    );
}

#[test]
fn commented_scenarios_reported_once() {
    let content = "\
Feature: Login
  As a user
  I want to login

  Scenario: User logs in
    Given I am on login page
    When I click login
    Then I see dashboard

  #Scenario: Incomplete scenario
  #  Given something
  # Scenario: Another draft
  #  Given something else
";
    let violations = validate_business_rules(content);
    let commented = violations
        .iter()
        .filter(|v| v.as_str() == COMMENTED_SCENARIO_VIOLATION)
        .count();

    assert_eq!(commented, 1);
}

#[parameterized(
    no_space = { "#Scenario: draft" },
    one_space = { "# Scenario: draft" },
)]
fn commented_scenario_forms(line: &str) {
    let content = format!("{CLEAN}\n  {line}\n");
    assert!(validate_business_rules(&content).contains(&COMMENTED_SCENARIO_VIOLATION.to_string()));
}

#[test]
fn outline_keyword_is_not_a_scenario_match() {
    let content = "\
Feature: Login
  As a user
  I want to login

  Scenario Outline: Parameterized
    When I enter <name>

    Examples:
      | name |
      | bob  |
";
    assert!(validate_business_rules(content).is_empty());
}

#[test]
fn text_without_feature_keyword_skips_description_rule() {
    let violations = validate_business_rules("Scenario: Orphan\n  Given a thing\n");
    assert!(violations.is_empty());
}

#[test]
fn blank_line_counts_toward_description_span() {
    // Line-count heuristic: keyword line, blank line and the indent before
    // `Scenario:` make three segments.
    let content = "Feature: Sparse\n\n  Scenario: One\n    Given a thing\n";
    assert!(validate_business_rules(content).is_empty());
}

#[test]
fn rules_run_on_syntactically_invalid_text() {
    let content = "Feature: Broken\nScenario: Y\nInvalidKeyword: nope\n";
    let violations = validate_business_rules(content);

    assert!(violations.contains(&FEATURE_DESCRIPTION_VIOLATION.to_string()));
    assert!(violations.iter().any(|v| v.contains("Given")));
}
