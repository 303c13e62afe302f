//! Square Search
//!
//! Brute-force search for 3×3 semi-magic squares of squares with the
//! structure of the Parker Square.
//!
//! # Overview
//!
//! - **Square**: immutable 3×3 grid, rendered as a square of squares
//! - **Constraint filter**: prunes `(a, b, d)` with `2a² − b² − d² = 0`
//! - **Predicate**: rows, columns and one diagonal magic; few repeats
//! - **Search**: exhaustive, optionally parallel, deterministic order
//!
//! # Example
//!
//! ```rust
//! use square_search::{search, SearchConfig, PARKER_SQUARE};
//!
//! let config = SearchConfig::new().with_val_max(48);
//! let square = search(&config).unwrap();
//!
//! assert_ne!(square, PARKER_SQUARE);
//! assert_eq!(square.magic_number(), 3579);
//! println!("{square}");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod constraint;
pub mod error;
pub mod predicate;
pub mod search;
pub mod selection;
pub mod square;

// Re-exports
pub use config::{SearchConfig, DEFAULT_VAL_MAX, MAX_VAL_MAX};
pub use constraint::{satisfies_parker_constraint, valid_triples, ParkerTriple};
pub use error::{ConfigError, SearchError};
pub use predicate::{
    has_minimal_repeating_values, is_magic_for_a_diagonal, is_magic_for_rows_and_columns,
    is_semi_magic_square_of_squares, magic_diagonal_count, Assessment, MAX_VALUE_REPEATS,
    MIN_UNIQUE_VALUES,
};
pub use search::{
    enumerate_squares, generate_magic_square_of_squares, search, search_all, SearchReport,
    SquareSearch,
};
pub use selection::Selection;
pub use square::{magic_number, sum_of_squares, Line, Square, ORDER, PARKER_SQUARE};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running searches
    pub use crate::{
        is_semi_magic_square_of_squares, search, search_all, Assessment, SearchConfig,
        SearchError, SearchReport, Selection, Square, SquareSearch, PARKER_SQUARE,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
