// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod init;
pub mod lint;
pub mod plan;
pub mod preview;

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Feature text together with the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub content: String,
}

/// Reads a feature file, or stdin when the path is `-`.
pub fn read_source(file: &Path) -> Result<Source> {
    if file == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| Error::ReadInput {
                path: "<stdin>".to_string(),
                source,
            })?;
        return Ok(Source {
            name: "<stdin>".to_string(),
            content,
        });
    }

    let name = file.display().to_string();
    let content = std::fs::read_to_string(file).map_err(|source| Error::ReadInput {
        path: name.clone(),
        source,
    })?;
    Ok(Source { name, content })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
