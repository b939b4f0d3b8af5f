//! Error types for binary value parsing and manipulation.
//!
//! Nothing in this crate panics on bad input. Parse failures are returned
//! from the assignment boundary (and move the value into its Invalid state),
//! while operator failures leave the value untouched.

use thiserror::Error;

/// Top-level error type for all operations on a [`BinaryValue`](crate::BinaryValue).
///
/// Each variant corresponds to a specific failure domain:
/// - Parse: the input could not be turned into a bit sequence
/// - Range: a numeric input or operator argument is out of bounds
/// - InvalidState: the value itself holds no bits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input validation failed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A number, position or projection is outside the supported range
    #[error("out of range: {0}")]
    Range(#[from] RangeError),

    /// The value is in the Invalid state and has nothing to operate on
    #[error("value is in the invalid state")]
    InvalidState,
}

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is not a number, string or bit array
    #[error("unsupported input type: {found}")]
    InvalidType { found: String },

    /// A character outside the alphabet of the detected radix
    #[error("invalid {radix} digit {digit:?} at position {position}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: Radix,
    },

    /// Bit array element other than 0, 1, false or true
    #[error("invalid bit value {found} at index {index}")]
    InvalidBitValue { index: usize, found: String },
}

/// Range errors for numeric input and structural operator arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Decimal input needs more bits than the decimal path supports
    #[error("decimal {value} exceeds {max_bits} bits")]
    DecimalTooWide { value: i128, max_bits: usize },

    /// Values are unsigned magnitudes
    #[error("negative decimal {0} is not supported")]
    Negative(i128),

    /// Bit position at or past the current length
    #[error("bit position {position} is outside a {len}-bit value")]
    BitPosition { position: usize, len: usize },

    /// Stored bits carry more significance than a decimal projection can hold
    #[error("value has {significant} significant bits, at most {max_bits} fit a decimal projection")]
    DecimalProjection { significant: usize, max_bits: usize },
}

/// Radix of a textual input, used to report digit errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Hex,
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Radix::Binary => f.write_str("binary"),
            Radix::Hex => f.write_str("hex"),
        }
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidType,
    InvalidDigit,
    InvalidBitValue,
    OutOfRange,
    InvalidState,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(ParseError::InvalidType { .. }) => ErrorKind::InvalidType,
            Error::Parse(ParseError::InvalidDigit { .. }) => ErrorKind::InvalidDigit,
            Error::Parse(ParseError::InvalidBitValue { .. }) => ErrorKind::InvalidBitValue,
            Error::Range(_) => ErrorKind::OutOfRange,
            Error::InvalidState => ErrorKind::InvalidState,
        }
    }
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err: Error = ParseError::InvalidDigit {
            digit: 'L',
            position: 4,
            radix: Radix::Hex,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::InvalidDigit);

        let err: Error = RangeError::Negative(-1).into();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);

        assert_eq!(Error::InvalidState.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_messages() {
        let err: Error = ParseError::InvalidDigit {
            digit: '3',
            position: 5,
            radix: Radix::Binary,
        }
        .into();
        assert_eq!(err.to_string(), "parse error: invalid binary digit '3' at position 5");

        let err: Error = RangeError::DecimalTooWide {
            value: 1 << 32,
            max_bits: 32,
        }
        .into();
        assert_eq!(err.to_string(), "out of range: decimal 4294967296 exceeds 32 bits");
    }
}
