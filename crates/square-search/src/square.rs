//! 3×3 squares of positive integers
//!
//! A [`Square`] stores the logical cell values. Every sum taken over a
//! square squares each cell first, so a "magic" line is one whose squared
//! entries add up to the magic number.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Number of rows and columns in every square
pub const ORDER: usize = 3;

/// A row, column or diagonal of a square
pub type Line = [u32; ORDER];

/// The Parker Square: magic for rows, columns and one diagonal, with
/// three values repeated.
///
/// Serves as the structural template for the search and as the baseline
/// that results are compared against.
pub const PARKER_SQUARE: Square = Square::new([[29, 1, 47], [41, 37, 1], [23, 41, 29]]);

/// An immutable 3×3 arrangement of integers
///
/// Cells are addressed by `(row, column)`, both 0-indexed. Serializes as a
/// nested array in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Square {
    cells: [Line; ORDER],
}

impl Square {
    /// Create a square from its rows
    #[inline]
    #[must_use]
    pub const fn new(cells: [Line; ORDER]) -> Self {
        Self { cells }
    }

    /// Value at `(row, col)`
    ///
    /// # Panics
    /// Panics if `row >= 3` or `col >= 3`.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        assert!(row < ORDER && col < ORDER, "index out of bounds");
        self.cells[row][col]
    }

    /// Rows as a nested array
    #[inline]
    #[must_use]
    pub fn as_rows(&self) -> &[Line; ORDER] {
        &self.cells
    }

    /// Row `row`
    ///
    /// # Panics
    /// Panics if `row >= 3`.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> Line {
        assert!(row < ORDER, "index out of bounds");
        self.cells[row]
    }

    /// Column `col`
    ///
    /// # Panics
    /// Panics if `col >= 3`.
    #[inline]
    #[must_use]
    pub fn column(&self, col: usize) -> Line {
        assert!(col < ORDER, "index out of bounds");
        [self.cells[0][col], self.cells[1][col], self.cells[2][col]]
    }

    /// All three columns, left to right
    #[must_use]
    pub fn columns(&self) -> [Line; ORDER] {
        [self.column(0), self.column(1), self.column(2)]
    }

    /// Top-left to bottom-right: (0,0), (1,1), (2,2)
    #[inline]
    #[must_use]
    pub fn main_diagonal(&self) -> Line {
        [self.cells[0][0], self.cells[1][1], self.cells[2][2]]
    }

    /// Bottom-left to top-right: (2,0), (1,1), (0,2)
    #[inline]
    #[must_use]
    pub fn anti_diagonal(&self) -> Line {
        [self.cells[2][0], self.cells[1][1], self.cells[0][2]]
    }

    /// Iterate over the nine cells in row-major order
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Sum of the squares of the first row
    ///
    /// Every row, column and magic diagonal must match this value. It is
    /// derived per square, never a global constant. Computed in `u128`,
    /// which holds three squared `u32::MAX` cells.
    #[inline]
    #[must_use]
    pub fn magic_number(&self) -> u128 {
        sum_of_squares(&self.cells[0])
    }

    /// Mirror across the main diagonal
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::new(self.columns())
    }

    /// Rotate a quarter turn clockwise
    #[must_use]
    pub fn rotate_clockwise(&self) -> Self {
        let mut cells = [[0; ORDER]; ORDER];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.cells[ORDER - 1 - c][r];
            }
        }
        Self::new(cells)
    }

    /// The eight rotations and reflections of this square
    ///
    /// Index 0 is the square itself; indices 1..4 are successive clockwise
    /// rotations; 4..8 are the same rotations of the transpose.
    #[must_use]
    pub fn symmetries(&self) -> [Square; 8] {
        let mut images = [*self; 8];
        let mut current = *self;
        for image in images.iter_mut().take(4).skip(1) {
            current = current.rotate_clockwise();
            *image = current;
        }
        current = self.transpose();
        for image in images.iter_mut().skip(4) {
            *image = current;
            current = current.rotate_clockwise();
        }
        images
    }

    /// Whether `other` is a rotation or reflection of this square
    #[must_use]
    pub fn is_symmetry_of(&self, other: &Square) -> bool {
        self.symmetries().contains(other)
    }
}

impl From<[Line; ORDER]> for Square {
    fn from(cells: [Line; ORDER]) -> Self {
        Self::new(cells)
    }
}

impl From<Square> for [Line; ORDER] {
    fn from(square: Square) -> Self {
        square.cells
    }
}

/// Renders the square as a square of squares:
///
/// ```text
/// [29², 1², 47²
/// 41², 37², 1²
/// 23², 41², 29²]
/// ```
impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i == 0 {
                f.write_str("[")?;
            } else {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value}²")?;
            }
            if i == ORDER - 1 {
                f.write_str("]")?;
            }
        }
        Ok(())
    }
}

/// Sum of each entry squared
#[inline]
#[must_use]
pub fn sum_of_squares(line: &[u32]) -> u128 {
    line.iter().map(|&v| u128::from(v) * u128::from(v)).sum()
}

/// Magic number of `square` (sum of squares of its first row)
#[inline]
#[must_use]
pub fn magic_number(square: &Square) -> u128 {
    square.magic_number()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parker_magic_number() {
        assert_eq!(PARKER_SQUARE.magic_number(), 29 * 29 + 1 + 47 * 47);
        assert_eq!(magic_number(&PARKER_SQUARE), 3051);
    }

    #[test]
    fn lines_are_addressed_row_major() {
        let sq = PARKER_SQUARE;
        assert_eq!(sq.get(1, 2), 1);
        assert_eq!(sq.row(2), [23, 41, 29]);
        assert_eq!(sq.column(0), [29, 41, 23]);
        assert_eq!(sq.main_diagonal(), [29, 37, 29]);
        assert_eq!(sq.anti_diagonal(), [23, 37, 47]);
        assert_eq!(sq.values().count(), 9);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn get_rejects_out_of_bounds() {
        let _ = PARKER_SQUARE.get(3, 0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn row_rejects_out_of_bounds() {
        let _ = PARKER_SQUARE.row(3);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn column_rejects_out_of_bounds() {
        let _ = PARKER_SQUARE.column(3);
    }

    #[test]
    fn magic_number_holds_largest_cells() {
        let widest = Square::new([[u32::MAX; 3]; 3]);
        let cell = u128::from(u32::MAX);
        assert_eq!(widest.magic_number(), 3 * cell * cell);
        assert_eq!(sum_of_squares(&widest.main_diagonal()), widest.magic_number());
    }

    #[test]
    fn display_brackets_first_and_last_rows() {
        let rendered = PARKER_SQUARE.to_string();
        assert_eq!(rendered, "[29², 1², 47²\n41², 37², 1²\n23², 41², 29²]");
    }

    #[test]
    fn four_rotations_return_to_start() {
        let sq = PARKER_SQUARE;
        let back = sq
            .rotate_clockwise()
            .rotate_clockwise()
            .rotate_clockwise()
            .rotate_clockwise();
        assert_eq!(back, sq);
        assert_eq!(sq.rotate_clockwise().row(0), [23, 41, 29]);
    }

    #[test]
    fn parker_is_symmetric_about_the_anti_diagonal() {
        let images = PARKER_SQUARE.symmetries();
        assert_eq!(images[0], PARKER_SQUARE);
        assert_eq!(images[4], PARKER_SQUARE.transpose());
        // A half turn equals the transpose, so only four images are distinct.
        assert_eq!(images[2], images[4]);
        let distinct: std::collections::HashSet<_> = images.iter().collect();
        assert_eq!(distinct.len(), 4);
        assert!(PARKER_SQUARE.transpose().is_symmetry_of(&PARKER_SQUARE));
    }

    #[test]
    fn serializes_as_nested_array() {
        let json = serde_json::to_string(&PARKER_SQUARE).unwrap();
        assert_eq!(json, "[[29,1,47],[41,37,1],[23,41,29]]");
        let back: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PARKER_SQUARE);
    }
}
