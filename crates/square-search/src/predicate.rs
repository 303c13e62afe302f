//! Qualification predicate for semi-magic squares of squares
//!
//! A square qualifies when:
//! - it repeats values no more than the Parker Square does (at least
//!   [`MIN_UNIQUE_VALUES`] distinct values, none occurring more than
//!   [`MAX_VALUE_REPEATS`] times)
//! - at least one diagonal is magic
//! - every row and column is magic
//!
//! "Magic" always means the squared entries sum to the square's own
//! [`magic number`](Square::magic_number).

use crate::square::{sum_of_squares, Square};
use serde::{Deserialize, Serialize};

/// Fewest distinct cell values a qualifying square may have
pub const MIN_UNIQUE_VALUES: usize = 6;

/// Most times any one value may appear in a qualifying square
pub const MAX_VALUE_REPEATS: usize = 2;

/// Whether `square` is a semi-magic square of squares
#[must_use]
pub fn is_semi_magic_square_of_squares(square: &Square) -> bool {
    let magic = square.magic_number();

    has_minimal_repeating_values(square)
        && is_magic_for_a_diagonal(square, magic)
        && is_magic_for_rows_and_columns(square, magic)
}

/// Whether every row and column squares-sums to `magic`
#[must_use]
pub fn is_magic_for_rows_and_columns(square: &Square, magic: u128) -> bool {
    square
        .as_rows()
        .iter()
        .chain(square.columns().iter())
        .all(|line| sum_of_squares(line) == magic)
}

/// Whether the anti-diagonal or the main diagonal squares-sums to `magic`
#[must_use]
pub fn is_magic_for_a_diagonal(square: &Square, magic: u128) -> bool {
    sum_of_squares(&square.anti_diagonal()) == magic
        || sum_of_squares(&square.main_diagonal()) == magic
}

/// Number of diagonals (0, 1 or 2) matching the square's magic number
#[must_use]
pub fn magic_diagonal_count(square: &Square) -> usize {
    let magic = square.magic_number();
    [square.main_diagonal(), square.anti_diagonal()]
        .iter()
        .filter(|diagonal| sum_of_squares(*diagonal) == magic)
        .count()
}

/// Whether the square repeats values no more than the Parker Square
#[must_use]
pub fn has_minimal_repeating_values(square: &Square) -> bool {
    let profile = RepeatProfile::of(square);
    profile.distinct >= MIN_UNIQUE_VALUES && profile.max_repeats <= MAX_VALUE_REPEATS
}

/// Frequency summary of a square's cell values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RepeatProfile {
    distinct: usize,
    max_repeats: usize,
}

impl RepeatProfile {
    fn of(square: &Square) -> Self {
        let mut values = [0u32; 9];
        for (slot, value) in values.iter_mut().zip(square.values()) {
            *slot = value;
        }
        values.sort_unstable();

        let mut distinct = 0;
        let mut max_repeats = 0;
        let mut run = 0;
        let mut previous = None;
        for value in values {
            if previous == Some(value) {
                run += 1;
            } else {
                distinct += 1;
                run = 1;
                previous = Some(value);
            }
            max_repeats = max_repeats.max(run);
        }

        Self {
            distinct,
            max_repeats,
        }
    }
}

/// Breakdown of how a square fares against each criterion
///
/// Used for reporting and for ranking results by how magic they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// Sum of squares of the first row
    pub magic_number: u128,
    /// Number of distinct cell values
    pub distinct_values: usize,
    /// Highest number of occurrences of any single value
    pub max_repeats: usize,
    /// Magic diagonals (0, 1 or 2)
    pub magic_diagonals: usize,
    /// All rows and columns magic
    pub rows_and_columns_magic: bool,
    /// Passes [`is_semi_magic_square_of_squares`]
    pub qualifies: bool,
}

impl Assessment {
    /// Evaluate every criterion for `square`
    #[must_use]
    pub fn of(square: &Square) -> Self {
        let magic_number = square.magic_number();
        let profile = RepeatProfile::of(square);
        let magic_diagonals = magic_diagonal_count(square);
        let rows_and_columns_magic = is_magic_for_rows_and_columns(square, magic_number);
        let qualifies = profile.distinct >= MIN_UNIQUE_VALUES
            && profile.max_repeats <= MAX_VALUE_REPEATS
            && magic_diagonals > 0
            && rows_and_columns_magic;

        Self {
            magic_number,
            distinct_values: profile.distinct,
            max_repeats: profile.max_repeats,
            magic_diagonals,
            rows_and_columns_magic,
            qualifies,
        }
    }

    /// Ranking key: more magic diagonals first, then more distinct values
    #[inline]
    #[must_use]
    pub fn magic_score(&self) -> (usize, usize) {
        (self.magic_diagonals, self.distinct_values)
    }
}
