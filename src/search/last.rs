//! Last-occurrence search (max-reduction mode).
//!
//! Every worker redundantly scans the whole array; any worker may discover
//! the global maximum anywhere, and a match is rare enough that the
//! per-match commit is cheap. No local buffering: each match is a
//! synchronized read-compare-write against the shared maximum, so lock
//! contention scales with the match count, not the array length.

use std::thread;

use crate::search::config::SearchConfig;
use crate::search::shared::SharedLast;

/// Find the highest index at which `target` occurs in `array`.
///
/// Spawns the configured number of workers, joins them all, and freezes the
/// shared maximum. Returns `None` when the target does not occur. The result
/// does not depend on the worker count or on scheduling order.
pub fn search_last(array: &[i64], target: i64, config: &SearchConfig) -> Option<usize> {
    let workers = config.workers.max(1);
    let shared = SharedLast::new();

    thread::scope(|scope| {
        for _ordinal in 0..workers {
            let shared = &shared;
            scope.spawn(move || scan_full(array, target, shared));
        }
    });

    shared.into_result()
}

/// Worker body: scan the entire array, committing every match.
fn scan_full(array: &[i64], target: i64, shared: &SharedLast) {
    for (index, &value) in array.iter().enumerate() {
        if value == target {
            shared.offer(index);
        }
    }
}
