// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::config::init_config;
use crate::error::Result;

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let dir = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let written = init_config(&dir)?;
    println!("Wrote {}", written.display());
    Ok(())
}
