// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    plain_pipe = { false, false, false, false },
    tty = { false, false, true, true },
    forced = { false, true, false, true },
    no_color_wins_over_tty = { true, false, true, false },
    no_color_wins_over_force = { true, true, true, false },
)]
fn decide_respects_env_and_tty(no_color: bool, force: bool, tty: bool, expected: bool) {
    assert_eq!(decide(no_color, force, tty), expected);
}

#[test]
fn paint_wraps_in_256_color_sequence() {
    assert_eq!(paint(74, "Feature", true), "\x1b[38;5;74mFeature\x1b[0m");
}

#[test]
fn paint_disabled_is_identity() {
    assert_eq!(paint(codes::ERROR, "failed", false), "failed");
}

#[test]
fn palette_codes_are_distinct() {
    let codes = [
        codes::HEADER,
        codes::LITERAL,
        codes::CONTEXT,
        codes::ERROR,
        codes::OK,
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
