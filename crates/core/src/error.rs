// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for port calls and review workflows.
//!
//! Gherkin parsing and validation never fail with an error value: bad input is
//! reported through `Option` and `ValidationResult`. Errors here are reserved
//! for the external systems behind the ports and for workflow steps whose
//! failure aborts the transaction.

use thiserror::Error;

/// Failure reported by an issue tracker or git host adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// The provider refused the request, e.g. an unknown workflow state or user.
    #[error("rejected: {0}")]
    Rejected(String),

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for port operations.
pub type PortResult<T> = std::result::Result<T, PortError>;

/// An essential approval step failed and the approval was aborted.
///
/// Each variant names the step that failed. Steps before it have already taken
/// effect on the external systems and are not rolled back.
#[derive(Debug, Error)]
pub enum ApprovalError {
    #[error("failed to create branch {branch}: {source}")]
    CreateBranch { branch: String, source: PortError },

    #[error("failed to commit {path} to {branch}: {source}")]
    Commit {
        branch: String,
        path: String,
        source: PortError,
    },

    #[error("committed {commit_id} to {branch} but failed to comment on {issue_id}: {source}")]
    AuditComment {
        issue_id: String,
        branch: String,
        commit_id: String,
        source: PortError,
    },
}

impl ApprovalError {
    /// The underlying port failure.
    pub fn port_error(&self) -> &PortError {
        match self {
            ApprovalError::CreateBranch { source, .. }
            | ApprovalError::Commit { source, .. }
            | ApprovalError::AuditComment { source, .. } => source,
        }
    }
}

/// The audit comment of a delegation or routing could not be recorded.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("failed to comment on {issue_id}: {source}")]
    AuditComment { issue_id: String, source: PortError },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
