// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generate-and-filter search for 6-number lotto combinations.
//!
//! Given a pool of 7 to 49 distinct numbers in 1..=49, the search visits
//! every 6-element subset of the pool and keeps the subsets that satisfy
//! five structural constraints.
//!
//! # Architecture
//!
//! Four components form a streaming pipeline:
//!
//! - [`pool::NumberPool`] - the validated, sorted pool of candidate numbers
//! - [`search`] - depth-first enumerator producing every 6-element subset
//!   of the pool, one at a time, in lexicographic order
//! - [`constraints`] - five pure structural checks ANDed into the single
//!   acceptance predicate
//! - [`search::CombinationSink`] - the output boundary receiving accepted
//!   combinations in enumeration order
//!
//! Enumeration is single-threaded and memory use is O(6) regardless of pool
//! size: candidates are built in one reusable buffer and judged as soon as
//! they are complete, never materialized as a full candidate list. For the
//! maximum pool (all of 1..=49) the search visits C(49,6) = 13,983,816
//! candidates.
//!
//! # Example
//!
//! ```
//! use lotto_search::pool::NumberPool;
//! use lotto_search::search::{self, CollectSink};
//!
//! let pool = NumberPool::new(vec![5, 9, 14, 22, 28, 33, 41]).unwrap();
//! let mut sink = CollectSink::new();
//! let statistics = search::search(&pool, &mut sink).unwrap();
//!
//! // Every subset was visited; the survivors are in the sink.
//! assert_eq!(statistics.visited(), pool.total_combinations());
//! assert_eq!(statistics.valid(), sink.combinations().len() as u64);
//! ```

pub mod combination;
pub mod constraints;
pub mod error;
pub mod pool;
pub mod search;

// Re-export commonly used types
pub use combination::{Combination, COMBINATION_SIZE};
pub use error::SearchError;
pub use pool::NumberPool;
pub use search::{CombinationSink, SearchStatistics};
