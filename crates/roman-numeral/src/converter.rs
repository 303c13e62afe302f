//! Direction-detecting conversion
//!
//! Numbers become numerals, numerals become numbers. Strings made only of
//! ASCII digits count as numbers, so `"6"` converts like `6`.

use crate::error::RomanError;
use crate::numeral::{from_roman, RomanNumeral};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::fmt::{self, Display, Formatter};

static INTEGER_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("integer pattern is a valid regex"));

/// Result of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// A number was converted to this numeral
    Numeral(RomanNumeral),
    /// A numeral was converted to this number
    Integer(u32),
}

impl Display for Conversion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeral(numeral) => write!(f, "{numeral}"),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// Convert a dynamically typed value
///
/// - numbers: must be whole and in `[1, 3999]`; converted to a numeral
/// - strings: see [`convert_token`]
/// - anything else: [`RomanError::InvalidInputType`]
pub fn convert(input: &Value) -> Result<Conversion, RomanError> {
    tracing::debug!("Converting {}", input);
    match input {
        Value::Number(number) => {
            if let Some(value) = number.as_i64() {
                integer_to_numeral(value)
            } else if let Some(value) = number.as_u64() {
                integer_to_numeral(i64::try_from(value).unwrap_or(i64::MAX))
            } else {
                float_to_numeral(number.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(text) => convert_token(text),
        other => Err(RomanError::InvalidInputType {
            found: json_type_name(other),
        }),
    }
}

/// Convert a text token
///
/// Digit-only tokens are read as numbers and encoded; every other token is
/// decoded as a numeral, so `"6.5"` and `"-1"` fail as invalid numerals.
pub fn convert_token(token: &str) -> Result<Conversion, RomanError> {
    if INTEGER_TEXT.is_match(token) {
        // digits only, so parsing can fail only on overflow
        let value = token.parse::<i64>().unwrap_or(i64::MAX);
        integer_to_numeral(value)
    } else {
        from_roman(token).map(Conversion::Integer)
    }
}

fn integer_to_numeral(value: i64) -> Result<Conversion, RomanError> {
    let in_range = u32::try_from(value).map_err(|_| RomanError::out_of_range(value))?;
    RomanNumeral::try_from(in_range).map(Conversion::Numeral)
}

#[allow(clippy::cast_possible_truncation)]
fn float_to_numeral(value: f64) -> Result<Conversion, RomanError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(RomanError::NotAnInteger(value));
    }
    // saturating cast; anything that saturates is out of range anyway
    integer_to_numeral(value as i64)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn numbers_become_numerals() {
        assert_eq!(convert(&json!(6)).unwrap().to_string(), "VI");
        assert_eq!(convert(&json!(20)).unwrap().to_string(), "XX");
        assert_eq!(convert(&json!(6.0)).unwrap().to_string(), "VI");
    }

    #[test]
    fn digit_strings_are_numbers() {
        assert_eq!(convert(&json!("6")).unwrap().to_string(), "VI");
        assert_eq!(convert_token("0006").unwrap().to_string(), "VI");
        assert_eq!(
            convert_token("99999999999999999999").unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn numerals_become_integers() {
        assert_eq!(convert(&json!("L")).unwrap(), Conversion::Integer(50));
    }

    #[test]
    fn fractional_numbers_are_type_errors() {
        let err = convert(&json!(2.5)).unwrap_err();
        assert_eq!(err, RomanError::NotAnInteger(2.5));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn non_scalar_input_is_type_error() {
        for (input, found) in [
            (json!(true), "boolean"),
            (json!(null), "null"),
            (json!([1]), "array"),
            (json!({"n": 1}), "object"),
        ] {
            assert_eq!(
                convert(&input).unwrap_err(),
                RomanError::InvalidInputType { found }
            );
        }
    }

    #[test]
    fn negative_and_large_numbers_are_range_errors() {
        assert_eq!(convert(&json!(-1)).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(convert(&json!(4000)).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(convert(&json!(0)).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(convert(&json!(1e20)).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(convert(&json!(u64::MAX)).unwrap_err().kind(), ErrorKind::Range);
    }
}
