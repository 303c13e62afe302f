//! Roman Numerals
//!
//! Bidirectional conversion between integers in `[1, 3999]` and canonical
//! Roman numerals.
//!
//! # Example
//!
//! ```rust
//! use roman_numeral::{convert_token, from_roman, to_roman, Conversion};
//!
//! assert_eq!(to_roman(1994).unwrap(), "MCMXCIV");
//! assert_eq!(from_roman("L").unwrap(), 50);
//! assert_eq!(convert_token("L").unwrap(), Conversion::Integer(50));
//! assert!(from_roman("IL").is_err());
//! ```

#![warn(missing_docs)]

pub mod converter;
pub mod error;
pub mod numeral;

// Re-exports
pub use converter::{convert, convert_token, Conversion};
pub use error::{ErrorKind, RomanError};
pub use numeral::{from_roman, is_valid_numeral, to_roman, RomanNumeral};

/// Smallest value with a Roman numeral
pub const MIN_VALUE: u32 = 1;

/// Largest value with a canonical Roman numeral
pub const MAX_VALUE: u32 = 3999;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
