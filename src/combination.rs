// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combination type.
//!
//! A combination is an unordered selection of 6 distinct numbers from the
//! pool, represented canonically in ascending order. Selection follows pool
//! position and the pool is sorted, so position order is also numeric order.

use std::fmt;

/// Number of elements in every combination. Fixed by the domain.
pub const COMBINATION_SIZE: usize = 6;

/// A complete candidate: exactly six numbers in strictly ascending order.
///
/// This is a newtype wrapper to keep the ascending invariant at the type
/// boundary rather than rechecking it in every constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination([u8; COMBINATION_SIZE]);

impl Combination {
    /// Create a new combination, panicking if not strictly ascending.
    ///
    /// # Panics
    ///
    /// Panics if `numbers` is not strictly ascending.
    pub fn new(numbers: [u8; COMBINATION_SIZE]) -> Self {
        assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "Combination not strictly ascending: {:?}",
            numbers
        );
        Self(numbers)
    }

    /// Try to create a combination, returning None if not strictly ascending.
    pub fn try_new(numbers: [u8; COMBINATION_SIZE]) -> Option<Self> {
        if numbers.windows(2).all(|w| w[0] < w[1]) {
            Some(Self(numbers))
        } else {
            None
        }
    }

    /// The six numbers, ascending.
    pub fn numbers(&self) -> &[u8; COMBINATION_SIZE] {
        &self.0
    }
}

impl fmt::Display for Combination {
    /// Bracketed list form, e.g. `[5, 9, 14, 22, 28, 33]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, number) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", number)?;
        }
        write!(f, "]")
    }
}
