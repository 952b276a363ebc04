// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

const GOOD: &str = "\
Feature: Login
  Users sign in to reach their dashboard.

  Scenario: Valid password
    Given a registered user
    When they sign in
    Then they see the dashboard
";

const NO_GIVEN: &str = "\
Feature: Login
  Users sign in to reach their dashboard.

  Scenario: Valid password
    When they sign in
    Then they see the dashboard
";

fn source(content: &str) -> Source {
    Source {
        name: "login.feature".to_string(),
        content: content.to_string(),
    }
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn clean_file_passes_strict() {
    let report = CheckReport::build(&source(GOOD));
    assert!(report.verdict(true).is_ok());

    let text = strip_ansi(&format_text(&report));
    assert!(text.starts_with("login.feature: valid (1 scenario(s), 3 step(s))"));
    assert!(text.contains("Business rules: none"));
}

#[test]
fn violations_fail_only_in_strict_mode() {
    let report = CheckReport::build(&source(NO_GIVEN));
    assert!(report.verdict(false).is_ok());

    let err = report.verdict(true).unwrap_err();
    assert!(matches!(err, Error::RuleViolations { count: 1, .. }));

    let text = strip_ansi(&format_text(&report));
    assert!(text.contains("  - Scenario 1 must include at least one Given step"));
}

#[test]
fn syntax_error_fails_without_strict() {
    let report = CheckReport::build(&source("this is not gherkin\n"));
    let err = report.verdict(false).unwrap_err();

    let Error::InvalidSyntax { line, .. } = err else {
        unreachable!("expected syntax error, got {err:?}");
    };
    assert!(line >= 1);
    assert!(strip_ansi(&format_text(&report)).contains("login.feature: invalid"));
}

#[test]
fn json_report_shape() {
    let report = CheckReport::build(&source(GOOD));
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["source"], "login.feature");
    assert_eq!(json["syntax"]["is_valid"], true);
    assert_eq!(json["syntax"]["scenario_count"], 1);
    assert_eq!(json["violations"], serde_json::json!([]));
}
