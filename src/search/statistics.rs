// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search statistics.
//!
//! Counters accumulated over a single search run: candidates visited,
//! candidates accepted, and rejections bucketed by the first constraint
//! that fired. The rejection array is sized by the constraint enum, so a
//! new constraint automatically gets a counter.

use crate::constraints::Constraint;
use strum::EnumCount;

/// Counters for one search run. Owned by the run and returned to the
/// caller; there is no shared mutable state.
#[derive(Debug, Default, Clone)]
pub struct SearchStatistics {
    visited: u64,
    valid: u64,
    rejected: [u64; Constraint::COUNT],
}

impl SearchStatistics {
    pub fn new() -> Self {
        SearchStatistics::default()
    }

    pub(crate) fn record_valid(&mut self) {
        self.visited += 1;
        self.valid += 1;
    }

    pub(crate) fn record_rejection(&mut self, constraint: Constraint) {
        self.visited += 1;
        self.rejected[constraint as usize] += 1;
    }

    /// Candidates handed to the constraint engine.
    pub fn visited(&self) -> u64 {
        self.visited
    }

    /// Candidates that passed every constraint and reached the sink.
    pub fn valid(&self) -> u64 {
        self.valid
    }

    /// Candidates whose first violation was `constraint`.
    pub fn rejected(&self, constraint: Constraint) -> u64 {
        self.rejected[constraint as usize]
    }

    /// Candidates rejected by any constraint.
    pub fn total_rejected(&self) -> u64 {
        self.rejected.iter().sum()
    }
}
