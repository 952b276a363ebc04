// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reviewer actions spanning the issue tracker and the git host.
//!
//! Every workflow separates essential steps (branch, commit, audit comment),
//! whose failure aborts with an error, from the non-essential tracker
//! mutation, whose failure is recorded as [`StateChange::Degraded`] and never
//! stops the workflow. The audit comment is posted whether or not the
//! mutation took effect.
//!
//! Steps run strictly in order and nothing is rolled back: an aborted
//! approval can leave a branch without a commit, or a commit without a
//! status update.

mod approval;
mod delegation;
mod locks;
mod service;

pub use approval::{
    approve, branch_name_for, feature_file_path_for, generate_commit_message, short_commit_id,
    ApprovalRequest, ApprovalResult, APPROVED_STATUS,
};
pub use delegation::{delegate, route, DelegationResult, RoutingResult};
pub use locks::IssueLocks;
pub use service::ReviewService;

use serde::Serialize;
use tracing::warn;

use crate::port::{IssueTrackerPort, IssueUpdate};

/// Whether the tracker mutation of a workflow took effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StateChange {
    Applied,
    /// The tracker refused or failed the update; the workflow carried on.
    Degraded { reason: String },
}

impl StateChange {
    pub fn is_applied(&self) -> bool {
        matches!(self, StateChange::Applied)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            StateChange::Applied => None,
            StateChange::Degraded { reason } => Some(reason),
        }
    }
}

/// Attempts a tracker update, downgrading any failure to `Degraded`.
async fn update_best_effort(
    tracker: &dyn IssueTrackerPort,
    issue_id: &str,
    update: IssueUpdate,
) -> StateChange {
    match tracker.update_issue(issue_id, update).await {
        Ok(()) => StateChange::Applied,
        Err(e) => {
            warn!(issue = issue_id, error = %e, "issue update failed; continuing");
            StateChange::Degraded {
                reason: e.to_string(),
            }
        }
    }
}

/// Appends an optional reason paragraph to an audit comment.
fn with_reason(mut body: String, reason: Option<&str>) -> String {
    if let Some(reason) = reason.filter(|r| !r.is_empty()) {
        body.push_str("\n\n**Reason:** ");
        body.push_str(reason);
    }
    body
}
