// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dry run of an approval: everything `approve` would derive, without
//! touching a tracker or git host.

use serde::Serialize;
use std::path::Path;

use taster_core::workflow::{branch_name_for, feature_file_path_for, generate_commit_message};
use taster_core::{Author, Issue};

use super::read_source;
use crate::cli::OutputFormat;
use crate::colors;
use crate::config::Config;
use crate::error::Result;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub(crate) struct ApprovalPlan {
    pub issue: String,
    pub repo: Option<String>,
    pub base_branch: String,
    pub branch: String,
    pub path: String,
    pub author: Option<Author>,
    pub commit_message: String,
}

pub(crate) struct PlanInput<'a> {
    pub issue_id: &'a str,
    pub title: &'a str,
    pub path: Option<&'a str>,
    pub content: &'a str,
}

impl ApprovalPlan {
    pub(crate) fn build(input: &PlanInput<'_>, config: &Config, llm_api_key: Option<&str>) -> Self {
        // Only the id and title matter for derivation; status and project are
        // tracker-side.
        let issue = Issue::new(input.issue_id, input.title, "", "");
        let approval = &config.approval;
        let path = match input.path {
            Some(path) => path.to_string(),
            None => feature_file_path_for(&issue, &approval.features_dir),
        };

        ApprovalPlan {
            branch: branch_name_for(&issue.id),
            commit_message: generate_commit_message(&issue, input.content, llm_api_key),
            issue: issue.id,
            repo: approval.repo.clone(),
            base_branch: approval.base_branch.clone(),
            path,
            author: approval.author(),
        }
    }
}

pub fn run(
    config: &Config,
    issue_id: &str,
    title: &str,
    path: Option<&str>,
    file: &Path,
    output: OutputFormat,
) -> Result<()> {
    let source = read_source(file)?;
    let input = PlanInput {
        issue_id,
        title,
        path,
        content: &source.content,
    };
    let llm_api_key = config.llm_api_key();
    let plan = ApprovalPlan::build(&input, config, llm_api_key.as_deref());

    match output {
        OutputFormat::Text => print!("{}", format_text(&plan)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}

pub(crate) fn format_text(plan: &ApprovalPlan) -> String {
    let unset = colors::context("(not configured)");
    let repo = plan.repo.clone().unwrap_or_else(|| unset.clone());
    let author = plan
        .author
        .as_ref()
        .map(|a| format!("{} <{}>", a.name, a.email))
        .unwrap_or(unset);

    let mut out = String::new();
    out.push_str(&format!("{} {}\n", colors::header("Issue:"), plan.issue));
    out.push_str(&format!("{} {}\n", colors::header("Repo:"), repo));
    out.push_str(&format!(
        "{} {} (from {})\n",
        colors::header("Branch:"),
        plan.branch,
        plan.base_branch
    ));
    out.push_str(&format!("{} {}\n", colors::header("Path:"), plan.path));
    out.push_str(&format!("{} {}\n", colors::header("Author:"), author));
    out.push_str(&format!("{}\n", colors::header("Commit message:")));
    for line in plan.commit_message.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
