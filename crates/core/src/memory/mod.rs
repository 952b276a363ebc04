// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-process implementations of the ports.
//!
//! Both honor the full port contracts (unknown states and users are rejected,
//! duplicate branches fail, commits probe for an existing file) and record
//! every call so workflows can be exercised without a network. Failures can be
//! injected to drive the degraded and fatal paths.

mod repo;
mod tracker;

pub use repo::{BranchRecord, CommitRecord, InMemoryRepo};
pub use tracker::{InMemoryTracker, DEFAULT_WORKFLOW_STATES};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks shared state, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
