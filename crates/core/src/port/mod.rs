// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Contracts for the external systems the workflows talk to.
//!
//! Provides a trait-based boundary that enables:
//! - Vendor adapters (issue trackers, git hosts) chosen at startup
//! - In-memory implementations for tests and local runs
//!
//! Workflow code only ever sees `dyn IssueTrackerPort` and `dyn GitPort`.

use std::future::Future;
use std::pin::Pin;

use crate::error::PortResult;

mod git;
mod tracker;

pub use git::{Author, FileCommit, GitPort};
pub use tracker::{Comment, Issue, IssueTrackerPort, IssueUpdate, User, FEATURE_FILE_PATH_FIELD};

/// Future returned by every port operation.
pub type PortFuture<'a, T> = Pin<Box<dyn Future<Output = PortResult<T>> + Send + 'a>>;
