//! Partitioning of the array index range across workers.

/// A contiguous, half-open index range `[start, end)` assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// First index of the range (inclusive).
    pub start: usize,
    /// One past the last index of the range (exclusive).
    pub end: usize,
}

impl Segment {
    /// Number of indices covered by the segment.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the segment covers no indices.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `[0, len)` into `workers` contiguous, non-overlapping segments.
///
/// Each segment has the base size `len / workers`; the last segment
/// additionally absorbs the remainder, so only it can be larger than the
/// base. Every worker gets a segment even when `workers > len` (the extras
/// are empty), and `len == 0` yields all-empty segments.
///
/// Workers are identified by their ordinal `0..workers`, fixed at spawn
/// time; `segments[ordinal]` is the range that worker scans.
pub fn partition(len: usize, workers: usize) -> Vec<Segment> {
    debug_assert!(workers >= 1, "partition requires at least one worker");
    let base = len / workers;

    (0..workers)
        .map(|ordinal| {
            let start = ordinal * base;
            let end = if ordinal == workers - 1 {
                len
            } else {
                start + base
            };
            Segment { start, end }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Disjoint, gap-free, exhaustive over `[0, len)`, in order.
    fn assert_covers(segments: &[Segment], len: usize) {
        let mut next = 0;
        for segment in segments {
            assert_eq!(segment.start, next, "gap or overlap at {}", segment.start);
            assert!(segment.end >= segment.start);
            next = segment.end;
        }
        assert_eq!(next, len, "segments must end at the array length");
        assert_eq!(
            segments.iter().map(Segment::len).sum::<usize>(),
            len,
            "segment lengths must sum to the array length"
        );
    }

    #[test]
    fn test_even_split() {
        let segments = partition(8, 4);
        assert_eq!(segments.len(), 4);
        assert_covers(&segments, 8);
        assert!(segments.iter().all(|s| s.len() == 2));
    }

    #[test]
    fn test_last_segment_absorbs_remainder() {
        let segments = partition(10, 3);
        assert_covers(&segments, 10);

        let base = 10 / 3;
        for segment in &segments[..2] {
            assert_eq!(segment.len(), base);
        }
        assert_eq!(segments[2].len(), base + 10 % 3);
    }

    #[test]
    fn test_only_last_exceeds_base() {
        for len in 0..40 {
            for workers in 1..12 {
                let segments = partition(len, workers);
                assert_eq!(segments.len(), workers);
                assert_covers(&segments, len);

                let base = len / workers;
                for segment in &segments[..workers - 1] {
                    assert_eq!(segment.len(), base);
                }
            }
        }
    }

    #[test]
    fn test_more_workers_than_elements() {
        let segments = partition(7, 10);
        assert_eq!(segments.len(), 10);
        assert_covers(&segments, 7);

        // Base size is zero, so everything lands in the last segment.
        assert!(segments[..9].iter().all(Segment::is_empty));
        assert_eq!(segments[9], Segment { start: 0, end: 7 });
    }

    #[test]
    fn test_empty_array() {
        let segments = partition(0, 4);
        assert_eq!(segments.len(), 4);
        assert!(segments.iter().all(Segment::is_empty));
    }

    #[test]
    fn test_single_worker_takes_everything() {
        let segments = partition(13, 1);
        assert_eq!(segments, vec![Segment { start: 0, end: 13 }]);
    }
}
