//! Testing utilities for the Parker-square workspace
//!
//! Shared fixtures, builders and proptest strategies.

#![allow(missing_docs)]

use proptest::prelude::*;
use square_search::{ParkerTriple, SearchConfig, Selection, Square};

/// Smallest range containing every value of the Parker Square
pub const PARKER_RANGE: u32 = 48;

/// Every qualifying square below [`PARKER_RANGE`], in enumeration order
pub const PARKER_RANGE_MATCHES: [Square; 4] = [
    Square::new([[29, 1, 47], [41, 37, 1], [23, 41, 29]]),
    Square::new([[29, 41, 23], [1, 37, 41], [47, 1, 29]]),
    Square::new([[37, 23, 41], [47, 29, 23], [1, 47, 37]]),
    Square::new([[37, 47, 1], [23, 29, 47], [41, 23, 37]]),
];

/// Last qualifying square for the default range `[1, 100)`
pub const DEFAULT_RANGE_LAST: Square = Square::new([[74, 94, 2], [46, 58, 94], [82, 46, 74]]);

/// Count of Parker-constraint triples below each bound
pub const VALID_TRIPLE_COUNTS: [(u32, usize); 5] = [(2, 0), (8, 2), (15, 4), (48, 26), (100, 74)];

pub fn sequential_config(val_max: u32) -> SearchConfig {
    SearchConfig::new().with_val_max(val_max).with_parallel(false)
}

pub fn parallel_config(val_max: u32) -> SearchConfig {
    SearchConfig::new().with_val_max(val_max).with_parallel(true)
}

pub fn most_magic_config(val_max: u32) -> SearchConfig {
    sequential_config(val_max).with_selection(Selection::MostMagic)
}

/// Multiply every cell by `factor`
///
/// Scaling preserves every magic sum relation, so a qualifying square stays
/// qualifying.
pub fn scale(square: &Square, factor: u32) -> Square {
    let mut rows = *square.as_rows();
    for row in &mut rows {
        for cell in row.iter_mut() {
            *cell *= factor;
        }
    }
    Square::new(rows)
}

/// Template fill from raw values
///
/// # Panics
/// Panics if `(a, b, d)` fails the Parker constraint.
pub fn template(a: u32, b: u32, d: u32, c: u32, e: u32, g: u32) -> Square {
    ParkerTriple::new(a, b, d)
        .expect("test triple must satisfy the Parker constraint")
        .square(c, e, g)
}

/// Arbitrary squares with cells in `[1, max)`
pub fn arb_square(max: u32) -> impl Strategy<Value = Square> {
    proptest::array::uniform3(proptest::array::uniform3(1..max)).prop_map(Square::new)
}

/// Squares in which some value occupies at least three cells
pub fn arb_square_with_triple_repeat(max: u32) -> impl Strategy<Value = Square> {
    (
        arb_square(max),
        1..max,
        proptest::sample::subsequence((0..9usize).collect::<Vec<_>>(), 3..=9),
    )
        .prop_map(|(square, value, positions)| {
            let mut rows = *square.as_rows();
            for pos in positions {
                rows[pos / 3][pos % 3] = value;
            }
            Square::new(rows)
        })
}

/// Squares drawn from at most five distinct values
pub fn arb_square_with_few_values(max: u32) -> impl Strategy<Value = Square> {
    (
        proptest::collection::vec(1..max, 1..=5),
        proptest::array::uniform9(any::<prop::sample::Index>()),
    )
        .prop_map(|(palette, picks)| {
            let mut rows = [[0; 3]; 3];
            for (i, pick) in picks.iter().enumerate() {
                rows[i / 3][i % 3] = palette[pick.index(palette.len())];
            }
            Square::new(rows)
        })
}
