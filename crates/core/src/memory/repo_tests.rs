// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

const REPO: &str = "acme/specs";

fn author() -> Author {
    Author::new("Reviewer", "reviewer@example.com")
}

fn commit<'a>(
    path: &'a str,
    content: &'a str,
    branch: &'a str,
    author: &'a Author,
) -> FileCommit<'a> {
    FileCommit {
        repo: REPO,
        path,
        content,
        message: "feat: add spec",
        branch,
        author,
    }
}

#[tokio::test]
async fn create_branch_copies_source_tree() {
    let repo = InMemoryRepo::new().with_file(REPO, "main", "README.md", "hello");
    repo.create_branch(REPO, "feature/x", "main").await.unwrap();

    assert!(repo.has_branch(REPO, "feature/x"));
    assert_eq!(repo.file(REPO, "feature/x", "README.md").as_deref(), Some("hello"));
    assert_eq!(
        repo.branches(),
        [BranchRecord {
            repo: REPO.into(),
            name: "feature/x".into(),
            from: "main".into(),
        }]
    );
}

#[tokio::test]
async fn create_branch_fails_when_source_missing() {
    let repo = InMemoryRepo::new().with_branch(REPO, "main");
    let err = repo
        .create_branch(REPO, "feature/x", "develop")
        .await
        .unwrap_err();

    assert!(matches!(err, PortError::NotFound(_)));
    assert!(repo.branches().is_empty());
}

#[tokio::test]
async fn create_branch_fails_when_target_exists() {
    let repo = InMemoryRepo::new()
        .with_branch(REPO, "main")
        .with_branch(REPO, "feature/x");
    let err = repo.create_branch(REPO, "feature/x", "main").await.unwrap_err();

    assert!(matches!(err, PortError::AlreadyExists(_)));
}

#[tokio::test]
async fn commit_file_creates_then_updates() {
    let repo = InMemoryRepo::new().with_branch(REPO, "main");
    let author = author();

    let first = repo
        .commit_file(commit("features/login.feature", "v1", "main", &author))
        .await
        .unwrap();
    let second = repo
        .commit_file(commit("features/login.feature", "v2", "main", &author))
        .await
        .unwrap();

    let commits = repo.commits();
    assert_eq!(commits.len(), 2);
    assert!(commits[0].created);
    assert!(!commits[1].created);
    assert_eq!(commits[0].id, first);
    assert_ne!(first, second);
    assert_eq!(first.len(), 40);
    assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(
        repo.file(REPO, "main", "features/login.feature").as_deref(),
        Some("v2")
    );
}

#[tokio::test]
async fn commit_file_to_missing_branch_fails() {
    let repo = InMemoryRepo::new().with_branch(REPO, "main");
    let author = author();
    let err = repo
        .commit_file(commit("a.feature", "x", "nope", &author))
        .await
        .unwrap_err();

    assert!(matches!(err, PortError::NotFound(_)));
    assert!(repo.commits().is_empty());
}

#[tokio::test]
async fn commit_file_failure_injection() {
    let repo = InMemoryRepo::new().with_branch(REPO, "main");
    repo.fail_commits(Some(PortError::Unavailable("502".into())));
    let author = author();

    let err = repo
        .commit_file(commit("a.feature", "x", "main", &author))
        .await
        .unwrap_err();
    assert_eq!(err, PortError::Unavailable("502".into()));
}

#[tokio::test]
async fn get_file_reads_content() {
    let repo = InMemoryRepo::new().with_file(REPO, "main", "features/a.feature", "Feature: A");
    let content = repo.get_file(REPO, "features/a.feature", "main").await.unwrap();

    assert_eq!(content, "Feature: A");
}

#[tokio::test]
async fn get_file_missing_path_fails() {
    let repo = InMemoryRepo::new().with_branch(REPO, "main");
    let err = repo.get_file(REPO, "nope.feature", "main").await.unwrap_err();

    assert!(matches!(err, PortError::NotFound(_)));
}

#[tokio::test]
async fn get_file_directory_fails() {
    let repo = InMemoryRepo::new().with_file(REPO, "main", "features/a.feature", "Feature: A");
    let err = repo.get_file(REPO, "features", "main").await.unwrap_err();

    assert!(matches!(err, PortError::Rejected(_)));
}

#[test]
fn directory_detection_requires_separator() {
    let mut tree = Tree::new();
    tree.insert("features/a.feature".into(), String::new());

    assert!(is_directory(&tree, "features"));
    assert!(!is_directory(&tree, "feat"));
    assert!(is_directory(&tree, ""));
}
