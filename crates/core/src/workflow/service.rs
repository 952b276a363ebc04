// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use tracing::debug;

use super::{
    approve, delegate, route, ApprovalRequest, ApprovalResult, DelegationResult, IssueLocks,
    RoutingResult,
};
use crate::error::{ApprovalError, PortResult, WorkflowError};
use crate::port::{GitPort, Issue, IssueTrackerPort};

/// The review workflows bound to a tracker and a git host, serialized per
/// issue.
///
/// Two approvals of one issue run one after the other: the second sees the
/// approval branch already present and fails at branch creation rather than
/// racing the first.
pub struct ReviewService {
    tracker: Arc<dyn IssueTrackerPort>,
    git: Arc<dyn GitPort>,
    locks: IssueLocks,
}

impl ReviewService {
    pub fn new(tracker: Arc<dyn IssueTrackerPort>, git: Arc<dyn GitPort>) -> Self {
        ReviewService {
            tracker,
            git,
            locks: IssueLocks::new(),
        }
    }

    /// Fetches the current snapshot of an issue.
    pub async fn issue(&self, issue_id: &str) -> PortResult<Issue> {
        self.tracker.get_issue(issue_id).await
    }

    pub async fn approve(
        &self,
        request: &ApprovalRequest<'_>,
    ) -> Result<ApprovalResult, ApprovalError> {
        let _guard = self.locks.acquire(&request.issue.id).await;
        debug!(issue = %request.issue.id, "issue lock held");
        approve(request, self.tracker.as_ref(), self.git.as_ref()).await
    }

    pub async fn delegate(
        &self,
        issue: &Issue,
        assignee_id: &str,
        delegator_name: &str,
        comment: Option<&str>,
    ) -> Result<DelegationResult, WorkflowError> {
        let _guard = self.locks.acquire(&issue.id).await;
        delegate(issue, assignee_id, delegator_name, comment, self.tracker.as_ref()).await
    }

    pub async fn route(
        &self,
        issue: &Issue,
        target_status: &str,
        router_name: &str,
        reason: Option<&str>,
    ) -> Result<RoutingResult, WorkflowError> {
        let _guard = self.locks.acquire(&issue.id).await;
        route(issue, target_status, router_name, reason, self.tracker.as_ref()).await
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
