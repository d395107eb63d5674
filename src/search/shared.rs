//! Shared aggregates that workers commit partial results into.
//!
//! One aggregate exists per search call and is owned by that call alone, so
//! concurrent independent searches cannot interfere. Workers only touch an
//! aggregate while holding its spin lock; the aggregate is frozen (consumed)
//! after every worker has joined.

use crate::search::error::SearchError;
use crate::search::spinlock::SpinLock;

/// Sentinel held while no match has been committed yet.
const NOT_FOUND: i64 = -1;

/// Running maximum index for the last-occurrence mode.
pub struct SharedLast {
    slot: SpinLock<i64>,
}

impl SharedLast {
    pub fn new() -> Self {
        Self {
            slot: SpinLock::new(NOT_FOUND),
        }
    }

    /// Commit a matching index, keeping the larger of it and the held value.
    ///
    /// The lock is held only for the compare and store; the caller performs
    /// array comparisons outside of it.
    pub fn offer(&self, index: usize) {
        let candidate = index as i64;
        let mut slot = self.slot.lock();
        if candidate > *slot {
            *slot = candidate;
        }
    }

    /// Freeze the aggregate once all workers have joined.
    ///
    /// `None` means the sentinel was never displaced, i.e. no match.
    pub fn into_result(self) -> Option<usize> {
        usize::try_from(self.slot.into_inner()).ok()
    }
}

impl Default for SharedLast {
    fn default() -> Self {
        Self::new()
    }
}

/// Growable buffer of matching indices for the collect-all mode.
///
/// Callers wrap this in a [`SpinLock`] and hold the lock across the whole
/// grow-and-append step, so capacity management never escapes the critical
/// section.
#[derive(Debug, Default)]
pub struct SharedMatches {
    indices: Vec<usize>,
}

impl SharedMatches {
    pub fn new() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Append a worker's local matches, growing the buffer if needed.
    ///
    /// Growth doubles the current capacity, or jumps straight to the
    /// required size when doubling is still insufficient. On allocation
    /// failure the buffer is left exactly as it was and the worker's
    /// contribution is rejected as a whole.
    pub fn append_all(&mut self, local: &[usize]) -> Result<(), SearchError> {
        let required = self.indices.len() + local.len();
        if required > self.indices.capacity() {
            let target = self.indices.capacity().saturating_mul(2).max(required);
            let additional = target - self.indices.len();
            self.indices
                .try_reserve_exact(additional)
                .map_err(|_| SearchError::Allocation { requested: target })?;
        }
        self.indices.extend_from_slice(local);
        Ok(())
    }

    /// Number of committed indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Freeze the aggregate and hand back the raw, unordered indices.
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}
