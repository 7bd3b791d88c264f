// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural constraints on candidate combinations.
//!
//! Five independent boolean checks, each a pure function of the combination.
//! A candidate is accepted iff none of them is violated. All five checks are
//! total over any well-formed combination; evaluation order only affects
//! which violation is reported first, never acceptance.
//!
//! The parity checks are deliberately kept as a pair even though a size-6
//! combination makes them mirror images of each other: the pair remains
//! correct if the combination size ever changes.

use crate::combination::Combination;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// At most this many numbers of one parity.
const MAX_SAME_PARITY: usize = 4;

/// At most this many adjacent consecutive pairs.
const MAX_CONSECUTIVE_PAIRS: usize = 2;

/// At most this many numbers sharing a last digit or a tens group.
const MAX_PER_BUCKET: u8 = 3;

/// Number of last-digit buckets (digits 0..=9).
const LAST_DIGIT_BUCKETS: usize = 10;

/// Number of tens groups (1-9, 10-19, 20-29, 30-39, 40-49).
const TENS_GROUPS: usize = 5;

/// The five structural constraints, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Constraint {
    /// More than 4 even numbers.
    TooManyEvens,
    /// More than 4 odd numbers.
    TooManyOdds,
    /// More than 2 adjacent pairs where the second is the first plus one.
    TooManyConsecutive,
    /// More than 3 numbers sharing a last digit.
    TooManySameEndings,
    /// More than 3 numbers in one tens group.
    TooManySameTens,
}

impl Constraint {
    /// Whether `combination` violates this constraint.
    pub fn violated_by(self, combination: &Combination) -> bool {
        match self {
            Constraint::TooManyEvens => has_too_many_evens(combination),
            Constraint::TooManyOdds => has_too_many_odds(combination),
            Constraint::TooManyConsecutive => has_too_many_consecutive(combination),
            Constraint::TooManySameEndings => has_too_many_same_endings(combination),
            Constraint::TooManySameTens => has_too_many_same_tens(combination),
        }
    }

    /// Short name for reporting.
    pub fn name(self) -> &'static str {
        match self {
            Constraint::TooManyEvens => "evens",
            Constraint::TooManyOdds => "odds",
            Constraint::TooManyConsecutive => "consecutive",
            Constraint::TooManySameEndings => "same-endings",
            Constraint::TooManySameTens => "same-tens",
        }
    }
}

/// Whether `combination` passes every constraint.
pub fn is_valid(combination: &Combination) -> bool {
    first_violation(combination).is_none()
}

/// The first constraint `combination` violates, in declaration order, or
/// None if it passes all five.
pub fn first_violation(combination: &Combination) -> Option<Constraint> {
    Constraint::iter().find(|constraint| constraint.violated_by(combination))
}

fn has_too_many_evens(combination: &Combination) -> bool {
    let evens = combination
        .numbers()
        .iter()
        .filter(|&&n| n % 2 == 0)
        .count();
    evens > MAX_SAME_PARITY
}

fn has_too_many_odds(combination: &Combination) -> bool {
    let odds = combination
        .numbers()
        .iter()
        .filter(|&&n| n % 2 != 0)
        .count();
    odds > MAX_SAME_PARITY
}

/// Adjacency is within the ascending combination, not within the pool.
fn has_too_many_consecutive(combination: &Combination) -> bool {
    let pairs = combination
        .numbers()
        .windows(2)
        .filter(|w| w[1] == w[0] + 1)
        .count();
    pairs > MAX_CONSECUTIVE_PAIRS
}

fn has_too_many_same_endings(combination: &Combination) -> bool {
    // Fixed-size histogram: bucket counts are domain constants.
    let mut last_digits = [0u8; LAST_DIGIT_BUCKETS];
    for &n in combination.numbers() {
        last_digits[(n % 10) as usize] += 1;
    }
    last_digits.iter().any(|&count| count > MAX_PER_BUCKET)
}

fn has_too_many_same_tens(combination: &Combination) -> bool {
    let mut tens = [0u8; TENS_GROUPS];
    for &n in combination.numbers() {
        tens[(n / 10) as usize] += 1;
    }
    tens.iter().any(|&count| count > MAX_PER_BUCKET)
}
