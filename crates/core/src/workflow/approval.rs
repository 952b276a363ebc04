// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Approval: commit a reviewed feature file on its own branch and record it
//! on the issue.

use serde::Serialize;
use tracing::{debug, error, info};

use super::{update_best_effort, StateChange};
use crate::error::ApprovalError;
use crate::port::{Author, FileCommit, GitPort, Issue, IssueTrackerPort, IssueUpdate};

/// Tracker status set on an approved issue.
pub const APPROVED_STATUS: &str = "Approved";

/// Length of the commit id prefix quoted in the audit comment.
const SHORT_COMMIT_LEN: usize = 8;

/// Everything needed to approve one feature file.
#[derive(Debug, Clone, Copy)]
pub struct ApprovalRequest<'a> {
    pub issue: &'a Issue,
    /// The reviewed Gherkin text, committed verbatim.
    pub feature_content: &'a str,
    /// Repository in host notation (e.g. "org/repo").
    pub repo: &'a str,
    /// Destination path inside the repository.
    pub file_path: &'a str,
    /// Branch the approval branch is cut from.
    pub base_branch: &'a str,
    pub author: &'a Author,
    /// Reserved for generated commit messages; currently has no effect.
    pub llm_api_key: Option<&'a str>,
}

/// Outcome of an approval whose essential steps all succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalResult {
    pub commit_id: String,
    pub commit_message: String,
    pub branch_name: String,
    pub status_change: StateChange,
    pub comment_id: String,
}

impl ApprovalResult {
    /// True when the issue was moved to [`APPROVED_STATUS`].
    pub fn issue_updated(&self) -> bool {
        self.status_change.is_applied()
    }
}

/// Approval branch for an issue. The same id always yields the same name.
pub fn branch_name_for(issue_id: &str) -> String {
    format!("feature/{}-gherkin-approval", issue_id.to_lowercase())
}

/// Repository path for an issue's feature file.
///
/// Uses the path recorded on the issue, else `<features_dir>/<id>.feature`.
pub fn feature_file_path_for(issue: &Issue, features_dir: &str) -> String {
    if let Some(path) = issue.feature_file_path() {
        return path.trim().to_string();
    }
    let file_name = format!("{}.feature", issue.id.to_lowercase());
    match features_dir.trim_end_matches('/') {
        "" => file_name,
        dir => format!("{dir}/{file_name}"),
    }
}

/// Commit message for an approved feature file.
///
/// The subject names the feature from the first `Feature:` line, falling back
/// to the issue title. `llm_api_key` is accepted for a future generated
/// message and does not change the result.
pub fn generate_commit_message(issue: &Issue, content: &str, llm_api_key: Option<&str>) -> String {
    if llm_api_key.is_some() {
        debug!(issue = %issue.id, "llm key supplied; using template commit message");
    }

    let feature_name = content
        .lines()
        .find(|line| line.trim_start().starts_with("Feature:"))
        .and_then(|line| line.split_once("Feature:"))
        .map(|(_, rest)| rest.trim())
        .unwrap_or(issue.title.as_str());

    format!(
        "feat: Add Gherkin specification for {feature_name}\n\n\
         Approved feature specification for {}: {}",
        issue.id, issue.title
    )
}

/// First eight characters of a commit id.
pub fn short_commit_id(commit_id: &str) -> &str {
    match commit_id.char_indices().nth(SHORT_COMMIT_LEN) {
        Some((end, _)) => &commit_id[..end],
        None => commit_id,
    }
}

/// Runs the approval transaction in order:
///
/// 1. create the approval branch from the base branch (fatal)
/// 2. commit the feature file to it (fatal)
/// 3. move the issue to [`APPROVED_STATUS`] (best effort)
/// 4. post the audit comment, even when step 3 degraded (fatal)
///
/// Nothing is rolled back when a later step fails.
pub async fn approve(
    request: &ApprovalRequest<'_>,
    tracker: &dyn IssueTrackerPort,
    git: &dyn GitPort,
) -> Result<ApprovalResult, ApprovalError> {
    let issue = request.issue;
    let branch_name = branch_name_for(&issue.id);
    info!(issue = %issue.id, branch = %branch_name, repo = request.repo, "approving feature");

    git.create_branch(request.repo, &branch_name, request.base_branch)
        .await
        .map_err(|source| {
            error!(
                issue = %issue.id,
                branch = %branch_name,
                error = %source,
                "branch creation failed"
            );
            ApprovalError::CreateBranch {
                branch: branch_name.clone(),
                source,
            }
        })?;

    let commit_message =
        generate_commit_message(issue, request.feature_content, request.llm_api_key);
    debug!(issue = %issue.id, message = %commit_message, "commit message");

    let commit_id = git
        .commit_file(FileCommit {
            repo: request.repo,
            path: request.file_path,
            content: request.feature_content,
            message: &commit_message,
            branch: &branch_name,
            author: request.author,
        })
        .await
        .map_err(|source| {
            error!(issue = %issue.id, path = request.file_path, error = %source, "commit failed");
            ApprovalError::Commit {
                branch: branch_name.clone(),
                path: request.file_path.to_string(),
                source,
            }
        })?;

    let status_change =
        update_best_effort(tracker, &issue.id, IssueUpdate::status(APPROVED_STATUS)).await;

    let body = audit_comment(&branch_name, &commit_id, request.file_path);
    let comment = tracker
        .add_comment(&issue.id, &body)
        .await
        .map_err(|source| {
            error!(issue = %issue.id, commit = %commit_id, error = %source, "audit comment failed");
            ApprovalError::AuditComment {
                issue_id: issue.id.clone(),
                branch: branch_name.clone(),
                commit_id: commit_id.clone(),
                source,
            }
        })?;

    info!(
        issue = %issue.id,
        commit = short_commit_id(&commit_id),
        issue_updated = status_change.is_applied(),
        "feature approved"
    );
    Ok(ApprovalResult {
        commit_id,
        commit_message,
        branch_name,
        status_change,
        comment_id: comment.id,
    })
}

fn audit_comment(branch_name: &str, commit_id: &str, file_path: &str) -> String {
    format!(
        "✅ Gherkin feature approved and committed\n\n\
         **Branch:** `{branch_name}`\n\
         **Commit:** `{}`\n\
         **File:** `{file_path}`",
        short_commit_id(commit_id)
    )
}

#[cfg(test)]
#[path = "approval_tests.rs"]
mod tests;
