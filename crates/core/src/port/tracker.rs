// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue tracker contract and the records it exchanges.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::PortFuture;

/// Custom field holding the repository path of an issue's feature file.
pub const FEATURE_FILE_PATH_FIELD: &str = "feature_file_path";

/// An issue as reported by the tracker. The tracker owns it; this is a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Tracker-native identifier (e.g. "ENG-123").
    pub id: String,
    pub title: String,
    /// Workflow state name (e.g. "In Review").
    pub status: String,
    pub assignee_id: Option<String>,
    pub project_id: String,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, String>,
}

impl Issue {
    /// Creates an issue with no assignee and no custom fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        status: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Issue {
            id: id.into(),
            title: title.into(),
            status: status.into(),
            assignee_id: None,
            project_id: project_id.into(),
            custom_fields: BTreeMap::new(),
        }
    }

    /// Repository path recorded on the issue for its feature file.
    pub fn feature_file_path(&self) -> Option<&str> {
        self.custom_fields
            .get(FEATURE_FILE_PATH_FIELD)
            .map(String::as_str)
            .filter(|p| !p.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub issue_id: String,
    pub author_id: String,
    pub content: String,
    /// ISO-8601 creation time.
    pub created_at: String,
}

/// Fields to change on an issue; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueUpdate {
    pub status: Option<String>,
    pub assignee_id: Option<String>,
}

impl IssueUpdate {
    pub fn status(status: impl Into<String>) -> Self {
        IssueUpdate {
            status: Some(status.into()),
            assignee_id: None,
        }
    }

    pub fn assignee(assignee_id: impl Into<String>) -> Self {
        IssueUpdate {
            status: None,
            assignee_id: Some(assignee_id.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.assignee_id.is_none()
    }
}

/// Issue tracker operations.
///
/// `update_issue` fails with a tracker-specific error when the target state or
/// user is invalid; callers must handle that rather than assume success.
pub trait IssueTrackerPort: Send + Sync {
    /// Fetch an issue by its tracker identifier.
    fn get_issue<'a>(&'a self, issue_id: &'a str) -> PortFuture<'a, Issue>;

    /// Change the status and/or assignee of an issue.
    fn update_issue<'a>(&'a self, issue_id: &'a str, update: IssueUpdate) -> PortFuture<'a, ()>;

    /// Post a comment and return it as stored by the tracker.
    fn add_comment<'a>(&'a self, issue_id: &'a str, content: &'a str) -> PortFuture<'a, Comment>;

    /// Members of a team, in tracker order.
    fn get_users<'a>(&'a self, team_id: &'a str) -> PortFuture<'a, Vec<User>>;
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
