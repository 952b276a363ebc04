// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async mutex per issue, so workflows on the same issue never interleave.
///
/// Keys are case-insensitive, matching branch derivation: `ENG-1` and `eng-1`
/// share a branch name and therefore share a lock. Entries nobody holds or
/// waits on are dropped on the next acquisition.
#[derive(Default)]
pub struct IssueLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl IssueLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `issue_id`. Released when the guard drops.
    pub async fn acquire(&self, issue_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(issue_id.to_lowercase()).or_default())
        };
        lock.lock_owned().await
    }

    /// Number of issues currently held or awaited.
    pub fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|lock| Arc::strong_count(lock) > 1)
            .count()
    }
}

#[cfg(test)]
#[path = "locks_tests.rs"]
mod tests;
