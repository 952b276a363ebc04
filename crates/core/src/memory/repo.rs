// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::sync::Mutex;

use super::lock;
use crate::error::{PortError, PortResult};
use crate::port::{Author, FileCommit, GitPort, PortFuture};

/// Path -> file content on one branch.
type Tree = BTreeMap<String, String>;

/// A `create_branch` call that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRecord {
    pub repo: String,
    pub name: String,
    pub from: String,
}

/// A `commit_file` call that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub id: String,
    pub repo: String,
    pub branch: String,
    pub path: String,
    pub content: String,
    pub message: String,
    pub author: Author,
    /// True when the commit created the file, false when it updated it.
    pub created: bool,
}

/// Git host kept in memory: repositories of branches of file trees.
pub struct InMemoryRepo {
    state: Mutex<RepoState>,
}

#[derive(Default)]
struct RepoState {
    /// Repo -> branch -> tree.
    repos: BTreeMap<String, BTreeMap<String, Tree>>,
    branches: Vec<BranchRecord>,
    commits: Vec<CommitRecord>,
    commit_failure: Option<PortError>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        InMemoryRepo {
            state: Mutex::new(RepoState::default()),
        }
    }

    /// Seeds an empty branch (e.g. the base branch).
    pub fn with_branch(self, repo: &str, branch: &str) -> Self {
        lock(&self.state)
            .repos
            .entry(repo.to_string())
            .or_default()
            .entry(branch.to_string())
            .or_default();
        self
    }

    /// Seeds a file, creating its branch if needed.
    pub fn with_file(self, repo: &str, branch: &str, path: &str, content: &str) -> Self {
        lock(&self.state)
            .repos
            .entry(repo.to_string())
            .or_default()
            .entry(branch.to_string())
            .or_default()
            .insert(normalize(path).to_string(), content.to_string());
        self
    }

    pub fn has_branch(&self, repo: &str, branch: &str) -> bool {
        lock(&self.state)
            .repos
            .get(repo)
            .is_some_and(|branches| branches.contains_key(branch))
    }

    /// Content of a file at the tip of a branch.
    pub fn file(&self, repo: &str, branch: &str, path: &str) -> Option<String> {
        lock(&self.state)
            .repos
            .get(repo)?
            .get(branch)?
            .get(normalize(path))
            .cloned()
    }

    /// Branches created through the port, oldest first.
    pub fn branches(&self) -> Vec<BranchRecord> {
        lock(&self.state).branches.clone()
    }

    /// Commits made through the port, oldest first.
    pub fn commits(&self) -> Vec<CommitRecord> {
        lock(&self.state).commits.clone()
    }

    /// Make every `commit_file` call fail with `error` (`None` clears it).
    pub fn fail_commits(&self, error: Option<PortError>) {
        lock(&self.state).commit_failure = error;
    }

    fn read_file(&self, repo: &str, path: &str, branch: &str) -> PortResult<String> {
        let state = lock(&self.state);
        let tree = branch_tree(&state, repo, branch)?;
        let path = normalize(path);

        if let Some(content) = tree.get(path) {
            return Ok(content.clone());
        }
        if is_directory(tree, path) {
            return Err(PortError::Rejected(format!(
                "{path} is a directory, not a file"
            )));
        }
        Err(PortError::NotFound(format!("{path} on {repo}@{branch}")))
    }

    fn write_file(&self, commit: FileCommit<'_>) -> PortResult<String> {
        let mut state = lock(&self.state);
        if let Some(error) = &state.commit_failure {
            return Err(error.clone());
        }

        let path = normalize(commit.path);
        let tree = branch_tree(&state, commit.repo, commit.branch)?;
        if is_directory(tree, path) {
            return Err(PortError::Rejected(format!(
                "{path} is a directory, not a file"
            )));
        }
        // Probe for an existing file to choose create vs update.
        let created = !tree.contains_key(path);

        let id = commit_id(&commit, state.commits.len());
        if let Some(tree) = state
            .repos
            .get_mut(commit.repo)
            .and_then(|branches| branches.get_mut(commit.branch))
        {
            tree.insert(path.to_string(), commit.content.to_string());
        }
        state.commits.push(CommitRecord {
            id: id.clone(),
            repo: commit.repo.to_string(),
            branch: commit.branch.to_string(),
            path: path.to_string(),
            content: commit.content.to_string(),
            message: commit.message.to_string(),
            author: commit.author.clone(),
            created,
        });
        Ok(id)
    }

    fn fork_branch(&self, repo: &str, new_name: &str, from_branch: &str) -> PortResult<()> {
        let mut state = lock(&self.state);
        let source = branch_tree(&state, repo, from_branch)?.clone();

        let branches = state
            .repos
            .get_mut(repo)
            .ok_or_else(|| PortError::NotFound(format!("repository {repo}")))?;
        if branches.contains_key(new_name) {
            return Err(PortError::AlreadyExists(format!(
                "branch {new_name} in {repo}"
            )));
        }
        branches.insert(new_name.to_string(), source);

        state.branches.push(BranchRecord {
            repo: repo.to_string(),
            name: new_name.to_string(),
            from: from_branch.to_string(),
        });
        Ok(())
    }
}

impl Default for InMemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl GitPort for InMemoryRepo {
    fn get_file<'a>(
        &'a self,
        repo: &'a str,
        path: &'a str,
        branch: &'a str,
    ) -> PortFuture<'a, String> {
        Box::pin(async move { self.read_file(repo, path, branch) })
    }

    fn commit_file<'a>(&'a self, commit: FileCommit<'a>) -> PortFuture<'a, String> {
        Box::pin(async move { self.write_file(commit) })
    }

    fn create_branch<'a>(
        &'a self,
        repo: &'a str,
        new_name: &'a str,
        from_branch: &'a str,
    ) -> PortFuture<'a, ()> {
        Box::pin(async move { self.fork_branch(repo, new_name, from_branch) })
    }
}

fn branch_tree<'s>(state: &'s RepoState, repo: &str, branch: &str) -> PortResult<&'s Tree> {
    state
        .repos
        .get(repo)
        .ok_or_else(|| PortError::NotFound(format!("repository {repo}")))?
        .get(branch)
        .ok_or_else(|| PortError::NotFound(format!("branch {branch} in {repo}")))
}

fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

fn is_directory(tree: &Tree, path: &str) -> bool {
    path.is_empty() || tree.keys().any(|p| is_under(p, path))
}

fn is_under(file: &str, dir: &str) -> bool {
    file.strip_prefix(dir).is_some_and(|rest| rest.starts_with('/'))
}

/// 40 hex characters, shaped like a git object id.
fn commit_id(commit: &FileCommit<'_>, sequence: usize) -> String {
    let sequence = sequence.to_string();
    let mut hasher = Sha256::new();
    for part in [
        commit.repo,
        commit.branch,
        commit.path,
        commit.content,
        commit.message,
        sequence.as_str(),
    ] {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(&hasher.finalize()[..20])
}

#[cfg(test)]
#[path = "repo_tests.rs"]
mod tests;
