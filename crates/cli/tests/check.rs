// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

#[test]
fn valid_file_reports_pickle_counts() {
    let temp = temp_with_file("login.feature", VALID_FEATURE);

    taster(&temp)
        .args(["check", "login.feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "login.feature: valid (3 scenario(s), 9 step(s))",
        ))
        .stdout(predicate::str::contains("Business rules: none"));
}

#[test]
fn invalid_syntax_exits_nonzero() {
    let temp = temp_with_file("bad.feature", INVALID_FEATURE);

    taster(&temp)
        .args(["check", "bad.feature"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("bad.feature: invalid"))
        .stderr(predicate::str::contains("error: bad.feature: invalid Gherkin syntax"));
}

#[test]
fn uneven_table_row_is_reported_on_its_line() {
    let content = "Feature: A\n  Scenario: B\n    Given x\n      | a |\n      | b | c |\n";
    let temp = temp_with_file("table.feature", content);

    taster(&temp)
        .args(["check", "table.feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid Gherkin syntax at line 5: (5:7): inconsistent cell count within the table",
        ));
}

#[test]
fn rule_violations_pass_unless_strict() {
    let temp = temp_with_file("logout.feature", NO_GIVEN_FEATURE);

    taster(&temp)
        .args(["check", "logout.feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scenario 1 must include at least one Given step",
        ));

    taster(&temp)
        .args(["check", "--strict", "logout.feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 business rule violation(s)"));
}

#[test]
fn json_output_combines_both_checks() {
    let temp = temp_with_file("logout.feature", NO_GIVEN_FEATURE);

    let output = taster(&temp)
        .args(["check", "-o", "json", "logout.feature"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["syntax"]["is_valid"], true);
    assert_eq!(json["syntax"]["scenario_count"], 1);
    assert_eq!(json["violations"].as_array().unwrap().len(), 1);
}

#[test]
fn reads_stdin_with_dash() {
    let temp = TempDir::new().unwrap();

    taster(&temp)
        .args(["check", "-"])
        .write_stdin(VALID_FEATURE)
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>: valid"));
}

#[test]
fn missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();

    taster(&temp)
        .args(["check", "nope.feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read nope.feature"));
}

#[test]
fn malformed_config_is_reported() {
    let temp = temp_with_file("login.feature", VALID_FEATURE);
    std::fs::write(temp.path().join("taster.toml"), "log_level = [").unwrap();

    taster(&temp)
        .args(["check", "login.feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}
