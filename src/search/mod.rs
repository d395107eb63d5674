//! Parallel array search with two reduction strategies.
//!
//! Both strategies share one discipline: a fixed pool of worker threads is
//! spawned per call, each worker produces a partial result, and partial
//! results are merged into a shared aggregate under a spin lock. The pool is
//! joined before the result is frozen, so nothing outlives the call.
//!
//! # Architecture
//!
//! The search system consists of:
//! - A **partitioner** that splits the index range into one segment per
//!   worker (`partition`)
//! - **Workers** that scan their assigned range and commit partial results
//!   ([`last`], [`collect`])
//! - **Shared aggregates** that are read and grown only under the lock
//!   ([`shared`])
//! - A **spin lock** guarding every commit ([`spinlock`])
//!
//! The two modes deliberately stay separate code paths: last-occurrence
//! workers take the lock once per match (eager compare-and-store), while
//! collect-all workers buffer locally and take the lock at most once each.
//! Their synchronization cost profiles differ, so unifying them would hide
//! that trade-off.

pub mod collect;
pub mod config;
pub mod error;
pub mod last;
pub mod partition;
pub mod shared;
pub mod spinlock;

pub use collect::search_all;
pub use config::SearchConfig;
pub use error::SearchError;
pub use last::search_last;
pub use partition::{Segment, partition};
