//! The Parker constraint on repeated values
//!
//! Writing the Parker Square's repeated-value pattern as
//!
//! ```text
//! [a², b², c²
//!  d², e², b²
//!  g², d², a²]
//! ```
//!
//! and equating the magic sums of its rows, columns and magic diagonal gives
//! `2a² − b² − d² = 0`. Triples that fail it can never fill the template, so
//! the search only enumerates the free cells for triples that pass.

use crate::square::Square;

/// Whether `a`, `b` and `d` are pairwise distinct and satisfy
/// `2a² − b² − d² = 0`
///
/// Total over `u32`; the arithmetic is widened so it cannot overflow.
#[must_use]
pub fn satisfies_parker_constraint(a: u32, b: u32, d: u32) -> bool {
    if a == b || b == d || d == a {
        return false;
    }
    let (a, b, d) = (u128::from(a), u128::from(b), u128::from(d));
    2 * a * a == b * b + d * d
}

/// Repeated values `(a, b, d)` that satisfy the Parker constraint
///
/// Only obtainable through [`ParkerTriple::new`], so holding one proves the
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParkerTriple {
    a: u32,
    b: u32,
    d: u32,
}

impl ParkerTriple {
    /// Validate `(a, b, d)` against the constraint
    #[inline]
    #[must_use]
    pub fn new(a: u32, b: u32, d: u32) -> Option<Self> {
        satisfies_parker_constraint(a, b, d).then_some(Self { a, b, d })
    }

    /// Corner value shared by (0,0) and (2,2)
    #[inline]
    #[must_use]
    pub fn a(&self) -> u32 {
        self.a
    }

    /// Value shared by (0,1) and (1,2)
    #[inline]
    #[must_use]
    pub fn b(&self) -> u32 {
        self.b
    }

    /// Value shared by (1,0) and (2,1)
    #[inline]
    #[must_use]
    pub fn d(&self) -> u32 {
        self.d
    }

    /// Fill the template with the free values `c`, `e` and `g`
    #[inline]
    #[must_use]
    pub fn square(&self, c: u32, e: u32, g: u32) -> Square {
        let Self { a, b, d } = *self;
        Square::new([[a, b, c], [d, e, b], [g, d, a]])
    }
}

/// All triples in `[1, val_max)³` that pass the constraint, in `a`, `b`, `d`
/// nested-loop order
#[must_use]
pub fn valid_triples(val_max: u32) -> Vec<ParkerTriple> {
    let mut triples = Vec::new();
    for a in 1..val_max {
        for b in 1..val_max {
            for d in 1..val_max {
                if let Some(triple) = ParkerTriple::new(a, b, d) {
                    triples.push(triple);
                }
            }
        }
    }
    triples
}
