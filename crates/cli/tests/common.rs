// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const VALID_FEATURE: &str = "\
@auth
Feature: User Login
  Users sign in with email and password to reach their dashboard.

  Scenario: Valid credentials
    Given a registered user
    When they sign in with the right password
    Then they see the dashboard

  Scenario Outline: Lockout
    Given a registered user
    When they fail to sign in <attempts> times
    Then the account is <state>

    Examples:
      | attempts | state    |
      | 2        | open     |
      | 5        | locked   |
";

/// Valid syntax, but the scenario has no Given step.
pub const NO_GIVEN_FEATURE: &str = "\
Feature: Logout
  Users end their session.

  Scenario: Sign out
    When they click sign out
    Then they see the login page
";

pub const INVALID_FEATURE: &str = "Not valid Gherkin syntax at all\n";

/// The binary, isolated from the caller's environment and run in a fresh
/// temp dir with no config.
pub fn taster(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("taster");
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("TASTER_LOG")
        .env_remove("TASTER_CONFIG")
        .env_remove("TASTER_LLM_API_KEY");
    cmd
}

/// Temp dir holding `name` with `content`.
pub fn temp_with_file(name: &str, content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(name), content).unwrap();
    temp
}
