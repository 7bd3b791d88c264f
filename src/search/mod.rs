// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first enumeration and filtering of combinations.
//!
//! # Algorithm
//!
//! Classic choice-without-replacement recursion. A single reusable buffer
//! holds the partial combination; at each depth the next slot is filled
//! from a cursor into the pool, and the recursion descends with the cursor
//! one past the chosen position. The loop's upper bound leaves room for the
//! remaining slots, so exhausted branches exit early. When the buffer is
//! full the candidate goes straight to the constraint engine: candidates
//! stream through, never accumulating in memory.
//!
//! The strictly increasing cursor bounds the recursion at depth 6 and
//! guarantees termination after exactly C(N,6) complete candidates, in
//! lexicographic pool order. The pool is sorted, so that order is also
//! numerically ascending.

pub mod sink;
pub mod statistics;

pub use sink::{CollectSink, CombinationSink, WriteSink};
pub use statistics::SearchStatistics;

use crate::combination::{Combination, COMBINATION_SIZE};
use crate::constraints;
use crate::error::SearchError;
use crate::pool::NumberPool;
use tracing::debug;

/// Run the full generate-and-filter search over `pool`.
///
/// Visits every 6-element subset of the pool in lexicographic order, judges
/// each against the five constraints, and emits the survivors to `sink` in
/// the order visited. Returns the counters for the run.
///
/// A sink failure aborts the remaining enumeration; nothing is emitted
/// twice and no candidate is evaluated twice. Zero survivors is a normal
/// outcome, not an error.
pub fn search<S: CombinationSink>(
    pool: &NumberPool,
    sink: &mut S,
) -> Result<SearchStatistics, SearchError> {
    let mut run = SearchRun {
        numbers: pool.numbers(),
        sink,
        buffer: [0; COMBINATION_SIZE],
        statistics: SearchStatistics::new(),
    };
    run.extend(0, 0)?;
    debug!(
        visited = run.statistics.visited(),
        valid = run.statistics.valid(),
        "search complete"
    );
    Ok(run.statistics)
}

/// State for one enumeration pass: the reusable buffer, the sink, and the
/// run counters. Exclusively owned by a single `search` call.
struct SearchRun<'a, S: CombinationSink> {
    numbers: &'a [u8],
    sink: &'a mut S,
    buffer: [u8; COMBINATION_SIZE],
    statistics: SearchStatistics,
}

impl<S: CombinationSink> SearchRun<'_, S> {
    /// Fill buffer slots from `depth` onward, drawing pool positions from
    /// `start` onward. Bounded recursion: depth never exceeds 6.
    fn extend(&mut self, depth: usize, start: usize) -> Result<(), SearchError> {
        if depth == COMBINATION_SIZE {
            return self.evaluate();
        }
        // One past the last position that still leaves enough numbers for
        // the remaining slots; empty for slices shorter than a combination.
        let remaining = COMBINATION_SIZE - depth;
        let end = (self.numbers.len() + 1).saturating_sub(remaining);
        for position in start..end {
            self.buffer[depth] = self.numbers[position];
            self.extend(depth + 1, position + 1)?;
        }
        Ok(())
    }

    /// Judge the completed buffer; emit it if it passes every constraint.
    ///
    /// The valid counter is incremented only after a successful emit, so it
    /// always matches what the sink actually received.
    fn evaluate(&mut self) -> Result<(), SearchError> {
        let combination = Combination::new(self.buffer);
        match constraints::first_violation(&combination) {
            None => {
                self.sink.emit(&combination)?;
                self.statistics.record_valid();
            }
            Some(constraint) => {
                self.statistics.record_rejection(constraint);
            }
        }
        Ok(())
    }
}
