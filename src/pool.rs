// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated pool of candidate numbers.
//!
//! The pool is a passive value type: a sorted sequence of distinct numbers
//! that the enumerator draws from. Deduplication and range checking are the
//! loader's responsibility; the pool sorts its input and enforces only the
//! size bounds.

use crate::combination::COMBINATION_SIZE;
use crate::error::SearchError;

/// Smallest number in the domain.
pub const MIN_NUMBER: u8 = 1;

/// Largest number in the domain.
pub const MAX_NUMBER: u8 = 49;

/// Smallest usable pool: one more than a single combination.
pub const MIN_POOL_SIZE: usize = COMBINATION_SIZE + 1;

/// Largest usable pool: every number in the domain.
pub const MAX_POOL_SIZE: usize = MAX_NUMBER as usize;

/// The pool of candidate numbers, sorted ascending, immutable once built.
#[derive(Debug, Clone)]
pub struct NumberPool {
    numbers: Vec<u8>,
}

impl NumberPool {
    /// Build a pool from externally validated numbers.
    ///
    /// The input must already be deduplicated and in 1..=49; this sorts it
    /// and rejects pools outside the [7, 49] size bounds.
    pub fn new(mut numbers: Vec<u8>) -> Result<Self, SearchError> {
        let size = numbers.len();
        if !(MIN_POOL_SIZE..=MAX_POOL_SIZE).contains(&size) {
            return Err(SearchError::InvalidPoolSize { size });
        }
        numbers.sort_unstable();
        debug_assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "pool contains duplicates"
        );
        debug_assert!(
            numbers
                .iter()
                .all(|&n| (MIN_NUMBER..=MAX_NUMBER).contains(&n)),
            "pool number out of range"
        );
        Ok(Self { numbers })
    }

    /// Number of candidates in the pool (N).
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// The pool numbers, ascending.
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// C(N, 6): how many candidates the enumerator will visit.
    pub fn total_combinations(&self) -> u64 {
        binomial(self.numbers.len() as u64, COMBINATION_SIZE as u64)
    }
}

/// Binomial coefficient C(n, k), computed multiplicatively.
///
/// Each intermediate product is an exact multiple of the divisor, so the
/// integer division is exact at every step. C(49, 6) fits easily in u64.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 1..=k {
        result = result * (n - k + i) / i;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_sorts_input() {
        let pool = NumberPool::new(vec![41, 5, 33, 9, 28, 14, 22]).unwrap();
        assert_eq!(pool.numbers(), &[5, 9, 14, 22, 28, 33, 41]);
        assert_eq!(pool.len(), 7);
    }

    #[test]
    fn test_pool_too_small() {
        let err = NumberPool::new(vec![1, 2, 3, 4, 5, 6]).unwrap_err();
        assert!(matches!(err, SearchError::InvalidPoolSize { size: 6 }));
    }

    #[test]
    fn test_pool_too_large() {
        let err = NumberPool::new(vec![1; 50]).unwrap_err();
        assert!(matches!(err, SearchError::InvalidPoolSize { size: 50 }));
    }

    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial(7, 6), 7);
        assert_eq!(binomial(10, 6), 210);
        assert_eq!(binomial(49, 6), 13_983_816);
    }

    #[test]
    fn test_binomial_degenerate() {
        assert_eq!(binomial(5, 6), 0);
        assert_eq!(binomial(6, 6), 1);
        assert_eq!(binomial(6, 0), 1);
    }

    #[test]
    fn test_total_combinations() {
        let pool = NumberPool::new((1..=49).collect()).unwrap();
        assert_eq!(pool.total_combinations(), 13_983_816);
    }
}
