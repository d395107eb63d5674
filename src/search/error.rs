//! Error types for search operations.

use std::fmt;

/// Failure of a search call.
///
/// "Not found" is never an error; it is reported as `None` or an empty
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Growing the shared match buffer failed during a commit.
    ///
    /// The whole search fails rather than returning a silently truncated
    /// result set.
    Allocation {
        /// Capacity, in indices, the buffer was trying to reach.
        requested: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Allocation { requested } => write!(
                f,
                "failed to grow the shared match buffer to {} entries",
                requested
            ),
        }
    }
}

impl std::error::Error for SearchError {}
