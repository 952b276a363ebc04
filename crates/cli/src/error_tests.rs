// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[test]
fn test_invalid_syntax_display() {
    let err = Error::InvalidSyntax {
        source_name: "login.feature".to_string(),
        line: 4,
        message: "(4:1): expected a step".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "login.feature: invalid Gherkin syntax at line 4: (4:1): expected a step"
    );
}

#[test]
fn test_config_exists_has_hint() {
    let err = Error::ConfigExists(PathBuf::from("/work/taster.toml"));
    let msg = err.to_string();
    assert!(msg.contains("/work/taster.toml"));
    assert!(msg.contains("hint:"));
}

#[test]
fn test_read_input_keeps_source() {
    let err = Error::ReadInput {
        path: "missing.feature".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().starts_with("cannot read missing.feature"));
}

#[parameterized(
    one = { 1, "a.feature: 1 business rule violation(s)" },
    many = { 3, "a.feature: 3 business rule violation(s)" },
)]
fn test_rule_violations_display(count: usize, expected: &str) {
    let err = Error::RuleViolations {
        source_name: "a.feature".to_string(),
        count,
    };
    assert_eq!(err.to_string(), expected);
}

#[test]
fn test_from_io_error() {
    let err: Error = std::io::Error::other("disk full").into();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.to_string(), "io error: disk full");
}

#[test]
fn test_from_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(err.to_string().starts_with("json error:"));
}
