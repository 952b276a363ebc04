// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delegation and routing: hand an issue to someone else, or move it to
//! another workflow state, leaving an audit comment either way.

use serde::Serialize;
use tracing::{error, info};

use super::{update_best_effort, with_reason, StateChange};
use crate::error::WorkflowError;
use crate::port::{Issue, IssueTrackerPort, IssueUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelegationResult {
    pub assignee_id: String,
    pub status_change: StateChange,
    pub comment_id: String,
}

impl DelegationResult {
    pub fn issue_updated(&self) -> bool {
        self.status_change.is_applied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingResult {
    pub new_status: String,
    pub status_change: StateChange,
    pub comment_id: String,
}

impl RoutingResult {
    pub fn issue_updated(&self) -> bool {
        self.status_change.is_applied()
    }
}

/// Reassigns `issue` to `assignee_id` and records who delegated it.
///
/// A refused reassignment degrades the result; the comment is posted anyway.
pub async fn delegate(
    issue: &Issue,
    assignee_id: &str,
    delegator_name: &str,
    comment: Option<&str>,
    tracker: &dyn IssueTrackerPort,
) -> Result<DelegationResult, WorkflowError> {
    info!(issue = %issue.id, assignee = assignee_id, "delegating feature");

    let status_change =
        update_best_effort(tracker, &issue.id, IssueUpdate::assignee(assignee_id)).await;
    let body = with_reason(format!("🔄 Feature delegated by {delegator_name}"), comment);
    let comment_id = post_audit_comment(tracker, &issue.id, &body).await?;

    Ok(DelegationResult {
        assignee_id: assignee_id.to_string(),
        status_change,
        comment_id,
    })
}

/// Moves `issue` to `target_status` and records who routed it.
///
/// A refused transition degrades the result; the comment is posted anyway.
pub async fn route(
    issue: &Issue,
    target_status: &str,
    router_name: &str,
    reason: Option<&str>,
    tracker: &dyn IssueTrackerPort,
) -> Result<RoutingResult, WorkflowError> {
    info!(issue = %issue.id, from = %issue.status, to = target_status, "routing feature");

    let status_change =
        update_best_effort(tracker, &issue.id, IssueUpdate::status(target_status)).await;
    let body = with_reason(
        format!("↪️ Feature routed to **{target_status}** by {router_name}"),
        reason,
    );
    let comment_id = post_audit_comment(tracker, &issue.id, &body).await?;

    Ok(RoutingResult {
        new_status: target_status.to_string(),
        status_change,
        comment_id,
    })
}

async fn post_audit_comment(
    tracker: &dyn IssueTrackerPort,
    issue_id: &str,
    body: &str,
) -> Result<String, WorkflowError> {
    match tracker.add_comment(issue_id, body).await {
        Ok(comment) => Ok(comment.id),
        Err(source) => {
            error!(issue = issue_id, error = %source, "audit comment failed");
            Err(WorkflowError::AuditComment {
                issue_id: issue_id.to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
#[path = "delegation_tests.rs"]
mod tests;
