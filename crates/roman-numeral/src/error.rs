//! Conversion errors

/// Broad category of a [`RomanError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input of the wrong kind (not a number or string, or a fractional number)
    Type,
    /// Number outside `[1, 3999]`
    Range,
    /// String that is not a canonical numeral
    Format,
}

/// Errors raised while converting
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RomanError {
    /// Neither a number nor a string
    #[error("cannot convert {found} input: expected an integer or a string")]
    InvalidInputType {
        /// JSON type that was supplied
        found: &'static str,
    },

    /// Number with a fractional part
    #[error("cannot convert floats to roman numerals (got {0})")]
    NotAnInteger(f64),

    /// Integer outside the representable range
    #[error("{value} is out of valid range for roman numerals [{min}, {max}]")]
    OutOfRange {
        /// Rejected value
        value: i64,
        /// Smallest representable value
        min: u32,
        /// Largest representable value
        max: u32,
    },

    /// String that does not follow the subtractive-pair grammar
    #[error("'{0}' is not a valid roman numeral")]
    InvalidNumeral(String),
}

impl RomanError {
    /// Category of this error
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInputType { .. } | Self::NotAnInteger(_) => ErrorKind::Type,
            Self::OutOfRange { .. } => ErrorKind::Range,
            Self::InvalidNumeral(_) => ErrorKind::Format,
        }
    }

    pub(crate) fn out_of_range(value: i64) -> Self {
        Self::OutOfRange {
            value,
            min: crate::MIN_VALUE,
            max: crate::MAX_VALUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_message_names_bounds() {
        let err = RomanError::out_of_range(4000);
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(
            err.to_string(),
            "4000 is out of valid range for roman numerals [1, 3999]"
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(RomanError::NotAnInteger(2.5).kind(), ErrorKind::Type);
        assert_eq!(
            RomanError::InvalidInputType { found: "boolean" }.kind(),
            ErrorKind::Type
        );
        assert_eq!(RomanError::InvalidNumeral("IL".into()).kind(), ErrorKind::Format);
    }
}
