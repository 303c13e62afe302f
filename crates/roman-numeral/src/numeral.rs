//! Table-driven encoding and decoding
//!
//! Both directions walk the same table of values and symbols, largest
//! first, with the six subtractive pairs (`CM`, `CD`, `XC`, `XL`, `IX`,
//! `IV`) listed as symbols of their own.

use crate::error::RomanError;
use crate::{MAX_VALUE, MIN_VALUE};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

const SYMBOLS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

// Canonical numerals only: symbols in non-increasing order, subtractive
// pairs as the sole exception, at most three repeats.
static NUMERAL_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("numeral grammar is a valid regex")
});

/// Whether `text` is a canonical, non-empty Roman numeral
#[must_use]
pub fn is_valid_numeral(text: &str) -> bool {
    !text.is_empty() && NUMERAL_GRAMMAR.is_match(text)
}

/// Encode `value` as a Roman numeral
///
/// # Errors
/// [`RomanError::OutOfRange`] unless `value` is in `[1, 3999]`.
pub fn to_roman(value: u32) -> Result<String, RomanError> {
    RomanNumeral::try_from(value).map(|numeral| numeral.to_string())
}

/// Decode a canonical Roman numeral
///
/// # Errors
/// [`RomanError::InvalidNumeral`] for empty, lowercase or non-canonical
/// input such as `IL` or `MMMM`.
pub fn from_roman(text: &str) -> Result<u32, RomanError> {
    if !is_valid_numeral(text) {
        return Err(RomanError::InvalidNumeral(text.to_string()));
    }

    let mut rest = text;
    let mut value = 0;
    for (amount, symbol) in SYMBOLS {
        while let Some(tail) = rest.strip_prefix(symbol) {
            value += amount;
            rest = tail;
        }
    }
    debug_assert!(rest.is_empty(), "grammar admits only table symbols");
    Ok(value)
}

/// A validated Roman numeral in `[1, 3999]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RomanNumeral(u32);

impl RomanNumeral {
    /// Integer value
    #[inline]
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for RomanNumeral {
    type Error = RomanError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RomanError::out_of_range(i64::from(value)))
        }
    }
}

impl From<RomanNumeral> for u32 {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.0
    }
}

impl FromStr for RomanNumeral {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_roman(s).map(Self)
    }
}

impl Display for RomanNumeral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut remaining = self.0;
        for (amount, symbol) in SYMBOLS {
            while remaining >= amount {
                remaining -= amount;
                f.write_str(symbol)?;
            }
        }
        Ok(())
    }
}
