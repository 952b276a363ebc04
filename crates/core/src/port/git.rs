// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git hosting contract.

use serde::{Deserialize, Serialize};

use super::PortFuture;

/// Commit author identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Author {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A single-file commit onto an existing branch.
#[derive(Debug, Clone, Copy)]
pub struct FileCommit<'a> {
    /// Repository in host notation (e.g. "org/repo").
    pub repo: &'a str,
    pub path: &'a str,
    pub content: &'a str,
    pub message: &'a str,
    pub branch: &'a str,
    pub author: &'a Author,
}

/// Git host operations.
pub trait GitPort: Send + Sync {
    /// Read a file at the tip of `branch`.
    ///
    /// Fails when the path does not exist or names a directory.
    fn get_file<'a>(&'a self, repo: &'a str, path: &'a str, branch: &'a str)
        -> PortFuture<'a, String>;

    /// Commit `content` to `path`, creating the file if absent and updating it
    /// otherwise. Returns the commit identifier.
    fn commit_file<'a>(&'a self, commit: FileCommit<'a>) -> PortFuture<'a, String>;

    /// Create `new_name` pointing at the tip of `from_branch`.
    ///
    /// Fails if `from_branch` does not exist or `new_name` already does.
    fn create_branch<'a>(
        &'a self,
        repo: &'a str,
        new_name: &'a str,
        from_branch: &'a str,
    ) -> PortFuture<'a, ()>;
}
