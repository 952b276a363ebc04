// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn examples_leaves_command_lines_alone() {
    let text = "  taster lint a.feature  Lint a file\n  taster check -  Read stdin";
    assert_eq!(examples(text), text);
}

#[test]
fn quickstart_mentions_every_command() {
    let text = quickstart();
    for command in ["init", "check", "preview", "plan"] {
        assert!(text.contains(&format!("taster {command}")), "missing {command}");
    }
}
