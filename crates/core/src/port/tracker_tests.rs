// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn feature_file_path_reads_custom_field() {
    let mut issue = Issue::new("ENG-1", "Login", "In Review", "proj-1");
    assert_eq!(issue.feature_file_path(), None);

    issue.custom_fields.insert(
        FEATURE_FILE_PATH_FIELD.to_string(),
        "features/user_login.feature".to_string(),
    );
    assert_eq!(issue.feature_file_path(), Some("features/user_login.feature"));
}

#[test]
fn blank_feature_file_path_is_ignored() {
    let mut issue = Issue::new("ENG-1", "Login", "In Review", "proj-1");
    issue
        .custom_fields
        .insert(FEATURE_FILE_PATH_FIELD.to_string(), "  ".to_string());
    assert_eq!(issue.feature_file_path(), None);
}

#[test]
fn issue_update_constructors() {
    assert_eq!(IssueUpdate::status("Approved").status.as_deref(), Some("Approved"));
    assert_eq!(IssueUpdate::assignee("user-2").assignee_id.as_deref(), Some("user-2"));
    assert!(IssueUpdate::default().is_empty());
    assert!(!IssueUpdate::status("Done").is_empty());
}

#[test]
fn issue_deserializes_without_custom_fields() {
    let json = r#"{"id":"ENG-9","title":"T","status":"Todo","assignee_id":null,"project_id":"p"}"#;
    let issue: Issue = serde_json::from_str(json).unwrap();

    assert_eq!(issue.id, "ENG-9");
    assert!(issue.custom_fields.is_empty());
}
