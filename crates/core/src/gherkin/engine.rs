// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Thin wrapper over the `gherkin` grammar engine.
//!
//! The engine is lenient in places where the Gherkin grammar is not: it
//! truncates over-long table rows and reads stray `Feature:` lines as
//! description text. A line scan run alongside it rejects those documents,
//! and engine failure positions are mapped back onto the real source lines.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// "Error at 7:3: [...]" as rendered by the engine's parse errors.
static ENGINE_LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"\bat (\d+):(\d+):?") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// English keywords that open a feature.
const FEATURE_KEYWORDS: [&str; 3] = ["Feature", "Business Need", "Ability"];

const DOC_STRING_FENCES: [&str; 2] = ["\"\"\"", "```"];

/// A syntax problem at a 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{}): {}", self.line, self.column, self.message)
    }
}

/// Parses feature text with the default (English) keyword set.
///
/// On failure returns the first problem in source order, rendered as
/// `(line:column): message`.
pub(crate) fn parse_document(content: &str) -> Result<::gherkin::Feature, String> {
    let line_count = content.lines().count();
    let scanned = scan_lines(content);

    // The grammar requires every line, including the last, to be terminated.
    let parsed = if content.ends_with('\n') {
        ::gherkin::Feature::parse(content, ::gherkin::GherkinEnv::default())
    } else {
        ::gherkin::Feature::parse(format!("{content}\n"), ::gherkin::GherkinEnv::default())
    };

    match (parsed, scanned) {
        (Ok(feature), None) => Ok(feature),
        (Ok(_), Some(scanned)) => Err(scanned.to_string()),
        (Err(e), scanned) => {
            let engine = engine_error(&e.to_string(), line_count);
            let first = match scanned {
                Some(scanned) if scanned.line <= engine.line => scanned,
                _ => engine,
            };
            Err(first.to_string())
        }
    }
}

/// Locates an engine failure within the source.
///
/// The engine reports the furthest point it reached, which for a failure at
/// end of input lies past the last line; those map back to the last line.
fn engine_error(message: &str, line_count: usize) -> SyntaxError {
    let last_line = line_count.max(1);
    let Some(caps) = ENGINE_LOCATION_RE.captures(message) else {
        return SyntaxError {
            line: last_line,
            column: 1,
            message: message.to_string(),
        };
    };

    let line = caps[1].parse().unwrap_or(last_line);
    let column = caps[2].parse().unwrap_or(1);
    let (line, column) = if line > last_line {
        (last_line, 1)
    } else {
        (line.max(1), column)
    };

    let expected = caps
        .get(0)
        .map_or("", |m| message[m.end()..].trim());
    let message = if expected.is_empty() {
        message.to_string()
    } else {
        format!("expected: {expected}")
    };
    SyntaxError {
        line,
        column,
        message,
    }
}

/// Line-level grammar checks the engine does not enforce.
///
/// Returns the first of: a significant line before the feature header, a
/// second feature header, or a table row whose cell count differs from the
/// rows before it. Doc string bodies are skipped; blank and comment lines
/// never end a table.
fn scan_lines(content: &str) -> Option<SyntaxError> {
    let mut fence: Option<&str> = None;
    let mut feature_seen = false;
    let mut table_width: Option<usize> = None;

    for (index, raw) in content.lines().enumerate() {
        let text = raw.trim();
        let at = |message: String| SyntaxError {
            line: index + 1,
            column: raw.chars().take_while(|c| c.is_whitespace()).count() + 1,
            message,
        };

        if let Some(open) = fence {
            if text.starts_with(open) {
                fence = None;
            }
            continue;
        }
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        if !feature_seen {
            if is_feature_line(text) {
                feature_seen = true;
            } else if !text.starts_with('@') {
                return Some(at(format!(
                    "expected: #EOF, #Language, #TagLine, #FeatureLine, #Comment, #Empty, \
                     got '{text}'"
                )));
            }
            continue;
        }

        if text.starts_with('|') {
            let cells = count_cells(text);
            match table_width {
                Some(width) if width != cells => {
                    return Some(at("inconsistent cell count within the table".to_string()));
                }
                Some(_) => {}
                None => table_width = Some(cells),
            }
            continue;
        }
        table_width = None;

        if let Some(open) = DOC_STRING_FENCES.into_iter().find(|f| text.starts_with(f)) {
            fence = Some(open);
        } else if is_feature_line(text) {
            return Some(at(format!("a document holds a single feature, got '{text}'")));
        }
    }
    None
}

fn is_feature_line(text: &str) -> bool {
    FEATURE_KEYWORDS
        .iter()
        .any(|keyword| text.strip_prefix(keyword).is_some_and(|rest| rest.starts_with(':')))
}

/// Cells between the leading pipe and the last unescaped pipe.
fn count_cells(row: &str) -> usize {
    let mut cells = 0;
    let mut chars = row.chars().skip(1);
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '|' => cells += 1,
            _ => {}
        }
    }
    cells
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
