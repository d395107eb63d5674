//! Parallel search over a fixed, read-only integer array.
//!
//! A search call spawns a fixed pool of worker threads that scan the array
//! for a target value and merge their findings into a shared result under a
//! spin lock. Two reduction strategies are provided:
//!
//! - [`search_last`]: the highest index at which the target occurs
//! - [`search_all`]: every index at which the target occurs, sorted in
//!   descending order
//!
//! # Example
//!
//! ```
//! use parfind::{search_all, search_last, SearchConfig};
//!
//! let array = [5, 2, 5, 2, 5];
//! let config = SearchConfig::default().with_workers(2);
//!
//! assert_eq!(search_last(&array, 5, &config), Some(4));
//! assert_eq!(search_all(&array, 5, &config).unwrap(), vec![4, 2, 0]);
//! ```

pub mod search;

pub use search::{SearchConfig, SearchError, search_all, search_last};
