//! Discrete logarithm lookup shared between idempotent sparse tables.

use std::sync::{Arc, PoisonError, RwLock};

/// Snapshot where `snapshot[i] == floor(log2(i))` for `i >= 1`, and `snapshot[0] == 0`.
pub type LogSnapshot = Arc<Vec<usize>>;

/// Monotonically growing table of discrete logarithms.
///
/// Growth is copy-on-grow: a larger vector is computed under the write lock and
/// swapped in, so snapshots handed out earlier stay valid and readers never see
/// a partially extended table. Share one instance between tables through an
/// `Arc` to compute each prefix only once.
#[derive(Debug)]
pub struct LogTable {
    current: RwLock<LogSnapshot>,
}

impl Default for LogTable {
    fn default() -> Self {
        Self::new()
    }
}

impl LogTable {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(vec![0, 0])),
        }
    }

    /// New table wrapped in an `Arc`, ready to be passed to several structures.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of lengths currently covered, that is, valid indices are `0..len`.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// The current snapshot without growing it.
    pub fn snapshot(&self) -> LogSnapshot {
        // Snapshots are replaced whole, so a poisoned lock still holds a valid one.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// A snapshot covering at least the lengths `0..=n`, growing the table if needed.
    pub fn covering(&self, n: usize) -> LogSnapshot {
        let cur = self.snapshot();
        if cur.len() > n {
            return cur;
        }
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        // Someone else may have grown it while we waited.
        if guard.len() > n {
            return guard.clone();
        }
        let mut grown = Vec::with_capacity(n + 1);
        grown.extend_from_slice(&guard);
        for i in grown.len()..=n {
            grown.push(grown[i / 2] + 1);
        }
        log::debug!("Grew log table from {} to {}", guard.len(), grown.len());
        *guard = Arc::new(grown);
        guard.clone()
    }
}
