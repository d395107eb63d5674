//! Collect-all search (buffer-then-merge mode).
//!
//! Each worker scans only its assigned segment, gathering matches into a
//! worker-local buffer it owns exclusively. A worker that found anything
//! performs exactly one commit at segment end: lock, grow the shared buffer
//! if needed, append. Workers with no matches never touch the lock at all.

use std::panic;
use std::thread;

use crate::search::config::SearchConfig;
use crate::search::error::SearchError;
use crate::search::partition::{Segment, partition};
use crate::search::shared::SharedMatches;
use crate::search::spinlock::SpinLock;

/// Find every index at which `target` occurs in `array`, sorted descending.
///
/// The array is partitioned across the configured number of workers, each
/// worker commits its local matches at most once, and the merged buffer is
/// sorted after all workers have joined. The result set does not depend on
/// the worker count or on scheduling order.
///
/// # Errors
///
/// Returns [`SearchError::Allocation`] if the shared buffer could not be
/// grown during a commit. The call fails as a whole; it never returns a
/// silently incomplete result set. Commits that succeeded before the failing
/// one are simply discarded along with the rest.
pub fn search_all(
    array: &[i64],
    target: i64,
    config: &SearchConfig,
) -> Result<Vec<usize>, SearchError> {
    let workers = config.workers.max(1);
    let segments = partition(array.len(), workers);
    let shared = SpinLock::new(SharedMatches::new());
    let mut first_error = None;

    thread::scope(|scope| {
        let handles: Vec<_> = segments
            .into_iter()
            .map(|segment| {
                let shared = &shared;
                scope.spawn(move || scan_segment(array, target, segment, shared))
            })
            .collect();

        // Join every worker before reporting; the first failure wins, but
        // all partitions still run to completion.
        for handle in handles {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
                Err(payload) => panic::resume_unwind(payload),
            }
        }
    });

    if let Some(err) = first_error {
        return Err(err);
    }

    let mut indices = shared.into_inner().into_indices();
    // Indices are unique, so an unstable sort is fine.
    indices.sort_unstable_by(|a, b| b.cmp(a));
    Ok(indices)
}

/// Worker body: scan one segment into a local buffer, then commit once.
///
/// The spin lock guard releases on every exit path, including the
/// allocation-failure return, so a failed commit leaves the shared buffer
/// untouched and unlocked.
fn scan_segment(
    array: &[i64],
    target: i64,
    segment: Segment,
    shared: &SpinLock<SharedMatches>,
) -> Result<(), SearchError> {
    let mut local = Vec::new();
    for index in segment.start..segment.end {
        if array[index] == target {
            local.push(index);
        }
    }

    if local.is_empty() {
        return Ok(());
    }

    let mut matches = shared.lock();
    matches.append_all(&local)
}
