// ============================================================================
// Numeral Errors
// Error types for Roman numeral encoding and decoding
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while converting to or from Roman numerals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumeralError {
    /// Integer outside the representable range 1..=3999
    OutOfRange {
        /// The rejected value
        value: i64,
    },
    /// Empty string passed where a numeral was expected
    EmptyInput,
    /// Character that is not one of `I V X L C D M`
    InvalidDigit {
        /// The offending character
        digit: char,
        /// Byte offset of the character in `source`
        position: usize,
        /// The full input after uppercase normalization
        source: String,
    },
    /// Decodable numeral that is not spelled the canonical way
    NonCanonical {
        /// The input after uppercase normalization
        source: String,
        /// Canonical spelling of the same value, if it has one
        canonical: Option<String>,
    },
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::OutOfRange { value } => write!(
                f,
                "arabic number {} out of range: must be 1 to 3,999",
                value
            ),
            NumeralError::EmptyInput => write!(f, "empty string is not a valid roman numeral"),
            NumeralError::InvalidDigit {
                digit,
                position,
                source,
            } => write!(
                f,
                "invalid digit {:?} at position {} in '{}'",
                digit, position, source
            ),
            NumeralError::NonCanonical {
                source,
                canonical: Some(canonical),
            } => write!(
                f,
                "'{}' is not a canonical roman numeral (expected '{}')",
                source, canonical
            ),
            NumeralError::NonCanonical {
                source,
                canonical: None,
            } => write!(f, "'{}' is not a canonical roman numeral", source),
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;
