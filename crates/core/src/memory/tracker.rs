// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;

use super::lock;
use crate::error::{PortError, PortResult};
use crate::port::{Comment, Issue, IssueTrackerPort, IssueUpdate, PortFuture, User};

/// Workflow states known to a fresh tracker.
pub const DEFAULT_WORKFLOW_STATES: &[&str] = &[
    "Backlog",
    "Todo",
    "In Progress",
    "In Review",
    "Technical Review",
    "Approved",
    "Done",
    "Canceled",
];

/// Issue tracker kept in memory.
pub struct InMemoryTracker {
    state: Mutex<TrackerState>,
}

struct TrackerState {
    issues: BTreeMap<String, Issue>,
    /// Team id -> members in insertion order.
    teams: BTreeMap<String, Vec<User>>,
    workflow_states: Vec<String>,
    comments: Vec<Comment>,
    update_attempts: Vec<(String, IssueUpdate)>,
    /// Consumed by the next `update_issue` call.
    update_failure: Option<PortError>,
    /// Applies to every `add_comment` call until cleared.
    comment_failure: Option<PortError>,
    actor_id: String,
}

impl InMemoryTracker {
    pub fn new() -> Self {
        InMemoryTracker {
            state: Mutex::new(TrackerState {
                issues: BTreeMap::new(),
                teams: BTreeMap::new(),
                workflow_states: DEFAULT_WORKFLOW_STATES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                comments: Vec::new(),
                update_attempts: Vec::new(),
                update_failure: None,
                comment_failure: None,
                actor_id: "taster".to_string(),
            }),
        }
    }

    pub fn with_issue(self, issue: Issue) -> Self {
        self.insert_issue(issue);
        self
    }

    pub fn with_team(self, team_id: &str, members: Vec<User>) -> Self {
        lock(&self.state)
            .teams
            .entry(team_id.to_string())
            .or_default()
            .extend(members);
        self
    }

    /// Replaces the known workflow states.
    pub fn with_workflow_states<I, S>(self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lock(&self.state).workflow_states = states.into_iter().map(Into::into).collect();
        self
    }

    /// Author id stamped on comments.
    pub fn with_actor(self, actor_id: &str) -> Self {
        lock(&self.state).actor_id = actor_id.to_string();
        self
    }

    pub fn insert_issue(&self, issue: Issue) {
        lock(&self.state).issues.insert(issue.id.clone(), issue);
    }

    /// Current snapshot of an issue.
    pub fn issue(&self, issue_id: &str) -> Option<Issue> {
        lock(&self.state).issues.get(issue_id).cloned()
    }

    /// All comments posted so far, oldest first.
    pub fn comments(&self) -> Vec<Comment> {
        lock(&self.state).comments.clone()
    }

    /// Every `update_issue` call, including failed ones.
    pub fn update_attempts(&self) -> Vec<(String, IssueUpdate)> {
        lock(&self.state).update_attempts.clone()
    }

    /// Make the next `update_issue` call fail with `error`.
    pub fn fail_next_update(&self, error: PortError) {
        lock(&self.state).update_failure = Some(error);
    }

    /// Make every `add_comment` call fail with `error` (`None` clears it).
    pub fn fail_comments(&self, error: Option<PortError>) {
        lock(&self.state).comment_failure = error;
    }

    fn find_issue(&self, issue_id: &str) -> PortResult<Issue> {
        lock(&self.state)
            .issues
            .get(issue_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("issue {issue_id}")))
    }

    fn apply_update(&self, issue_id: &str, update: IssueUpdate) -> PortResult<()> {
        let mut state = lock(&self.state);
        state
            .update_attempts
            .push((issue_id.to_string(), update.clone()));

        if let Some(error) = state.update_failure.take() {
            return Err(error);
        }
        if !state.issues.contains_key(issue_id) {
            return Err(PortError::NotFound(format!("issue {issue_id}")));
        }
        if let Some(status) = &update.status {
            if !state.workflow_states.iter().any(|s| s == status) {
                return Err(PortError::Rejected(format!(
                    "unknown workflow state '{status}'"
                )));
            }
        }
        if let Some(assignee_id) = &update.assignee_id {
            let known = state
                .teams
                .values()
                .flatten()
                .any(|user| &user.id == assignee_id);
            if !known {
                return Err(PortError::Rejected(format!("unknown user '{assignee_id}'")));
            }
        }

        // Validated above; apply both fields or neither.
        if let Some(issue) = state.issues.get_mut(issue_id) {
            if let Some(status) = update.status {
                issue.status = status;
            }
            if let Some(assignee_id) = update.assignee_id {
                issue.assignee_id = Some(assignee_id);
            }
        }
        Ok(())
    }

    fn post_comment(&self, issue_id: &str, content: &str) -> PortResult<Comment> {
        let mut state = lock(&self.state);
        if let Some(error) = &state.comment_failure {
            return Err(error.clone());
        }
        if !state.issues.contains_key(issue_id) {
            return Err(PortError::NotFound(format!("issue {issue_id}")));
        }

        let comment = Comment {
            id: format!("comment-{}", state.comments.len()),
            issue_id: issue_id.to_string(),
            author_id: state.actor_id.clone(),
            content: content.to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        state.comments.push(comment.clone());
        Ok(comment)
    }

    fn team_members(&self, team_id: &str) -> PortResult<Vec<User>> {
        lock(&self.state)
            .teams
            .get(team_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("team {team_id}")))
    }
}

impl Default for InMemoryTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueTrackerPort for InMemoryTracker {
    fn get_issue<'a>(&'a self, issue_id: &'a str) -> PortFuture<'a, Issue> {
        Box::pin(async move { self.find_issue(issue_id) })
    }

    fn update_issue<'a>(&'a self, issue_id: &'a str, update: IssueUpdate) -> PortFuture<'a, ()> {
        Box::pin(async move { self.apply_update(issue_id, update) })
    }

    fn add_comment<'a>(&'a self, issue_id: &'a str, content: &'a str) -> PortFuture<'a, Comment> {
        Box::pin(async move { self.post_comment(issue_id, content) })
    }

    fn get_users<'a>(&'a self, team_id: &'a str) -> PortFuture<'a, Vec<User>> {
        Box::pin(async move { self.team_members(team_id) })
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
