// ============================================================================
// Numeral Decoder
// Single-pass positional-subtraction decoding
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use super::tables::digit_value;

/// Previous-digit sentinel; no digit is larger, so the first one is never
/// treated as a subtractive prefix.
const PREVIOUS_SENTINEL: u64 = 1000;

/// Uppercase `text` one character at a time.
///
/// Characters whose uppercase form is more than one character (`ß`, `ﬁ`)
/// are kept as written, so positions and characters in errors refer to
/// what the caller passed in.
pub(crate) fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(up), None) => up,
                _ => c,
            }
        })
        .collect()
}

/// Decode a Roman numeral into its integer value.
///
/// Input is case-insensitive. Any sequence of Roman digits is accepted and
/// summed, with a smaller digit directly before a larger one counted as
/// negative; `IIII`, `IIV` and `MMMM` all decode. Use
/// [`StrictGrammar`](crate::engine::StrictGrammar) to accept only canonical
/// numerals.
///
/// # Errors
/// - `EmptyInput` if `text` is empty
/// - `InvalidDigit` for the first character outside `I V X L C D M`
///
/// # Example
/// ```
/// use roman_numeral::decode;
///
/// assert_eq!(decode("MCMXCIV").unwrap(), 1994);
/// assert_eq!(decode("xiv").unwrap(), 14);
/// assert!(decode("").is_err());
/// ```
pub fn decode(text: &str) -> NumeralResult<u64> {
    if text.is_empty() {
        return Err(NumeralError::EmptyInput);
    }
    let normalized = normalize(text);

    let mut previous = PREVIOUS_SENTINEL;
    let mut total: u64 = 0;
    for (position, c) in normalized.char_indices() {
        let Some(digit) = digit_value(c) else {
            return Err(NumeralError::InvalidDigit {
                digit: c,
                position,
                source: normalized.clone(),
            });
        };
        let digit = u64::from(digit);
        total += digit;

        // previous was added as a positive digit but is a subtractive prefix
        if previous < digit {
            total -= 2 * previous;
        }
        previous = digit;
    }

    Ok(total)
}

/// Returns true if `text` decodes without error.
///
/// # Example
/// ```
/// use roman_numeral::is_valid;
///
/// assert!(is_valid("MMXXIV"));
/// assert!(!is_valid("MCMXQ"));
/// assert!(!is_valid(""));
/// ```
#[inline]
pub fn is_valid(text: &str) -> bool {
    decode(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(decode("I").unwrap(), 1);
        assert_eq!(decode("IV").unwrap(), 4);
        assert_eq!(decode("IX").unwrap(), 9);
        assert_eq!(decode("MCMXCIV").unwrap(), 1994);
        assert_eq!(decode("MMXXIV").unwrap(), 2024);
        assert_eq!(decode("MMMCMXCIX").unwrap(), 3999);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(decode("xiv").unwrap(), 14);
        assert_eq!(decode("XIV").unwrap(), 14);
        assert_eq!(decode("xIv").unwrap(), 14);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode(""), Err(NumeralError::EmptyInput));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_invalid_digit() {
        let err = decode("MCMXQ").unwrap_err();
        assert_eq!(
            err,
            NumeralError::InvalidDigit {
                digit: 'Q',
                position: 4,
                source: "MCMXQ".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_digit_reports_normalized_source() {
        match decode("iqx") {
            Err(NumeralError::InvalidDigit {
                digit,
                position,
                source,
            }) => {
                assert_eq!(digit, 'Q');
                assert_eq!(position, 1);
                assert_eq!(source, "IQX");
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_multi_char_uppercase_kept_as_written() {
        assert_eq!(
            decode("ß"),
            Err(NumeralError::InvalidDigit {
                digit: 'ß',
                position: 0,
                source: "ß".to_string(),
            })
        );
        assert_eq!(
            decode("xﬁ"),
            Err(NumeralError::InvalidDigit {
                digit: 'ﬁ',
                position: 1,
                source: "Xﬁ".to_string(),
            })
        );
    }

    #[test]
    fn test_single_char_uppercase_accepted() {
        // dotless i uppercases to I
        assert_eq!(decode("ı").unwrap(), 1);
        assert_eq!(decode("xıv").unwrap(), 14);
    }

    #[test]
    fn test_position_is_byte_offset() {
        // 'é' uppercases to 'É', two bytes in UTF-8
        assert_eq!(
            decode("XéQ"),
            Err(NumeralError::InvalidDigit {
                digit: 'É',
                position: 1,
                source: "XÉQ".to_string(),
            })
        );
        match decode("ÉXQ") {
            Err(NumeralError::InvalidDigit { digit, position, .. }) => {
                assert_eq!(digit, 'É');
                assert_eq!(position, 0);
            },
            other => panic!("unexpected result: {:?}", other),
        }
        // 'ı' is two bytes but normalizes to one-byte 'I'; the offset
        // indexes into the normalized source
        assert_eq!(
            decode("ıxQ"),
            Err(NumeralError::InvalidDigit {
                digit: 'Q',
                position: 2,
                source: "IXQ".to_string(),
            })
        );
        match decode("XVÉ") {
            Err(NumeralError::InvalidDigit { position, source, .. }) => {
                assert_eq!(position, 2);
                assert_eq!(&source[position..], "É");
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_normalize_keeps_length_in_chars() {
        for text in ["ß", "straße", "ﬁx", "mcmxciv", "ıv"] {
            assert_eq!(normalize(text).chars().count(), text.chars().count(), "{:?}", text);
        }
        assert_eq!(normalize("mcmxciv"), "MCMXCIV");
    }

    #[test]
    fn test_whitespace_is_not_a_digit() {
        assert!(matches!(
            decode(" X"),
            Err(NumeralError::InvalidDigit { digit: ' ', position: 0, .. })
        ));
        assert!(matches!(
            decode("X\n"),
            Err(NumeralError::InvalidDigit { digit: '\n', position: 1, .. })
        ));
    }

    #[test]
    fn test_lenient_sequences_decode() {
        assert_eq!(decode("IIII").unwrap(), 4);
        assert_eq!(decode("IIV").unwrap(), 5);
        assert_eq!(decode("VX").unwrap(), 5);
        assert_eq!(decode("IC").unwrap(), 99);
        assert_eq!(decode("MMMM").unwrap(), 4000);
    }

    #[test]
    fn test_long_input_does_not_overflow() {
        let numeral = "M".repeat(10_000);
        assert_eq!(decode(&numeral).unwrap(), 10_000_000);
    }

    #[test]
    fn test_is_valid_agrees_with_decode() {
        for s in ["", "I", "iv", "MCMXQ", "IIV", "ABC", "mmxxiv"] {
            assert_eq!(is_valid(s), decode(s).is_ok(), "{:?}", s);
        }
    }
}
