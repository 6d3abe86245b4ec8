// ============================================================================
// Numeral Encoder
// Greedy largest-first encoding over the symbol ladder
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use super::tables::{LADDER, MAX_NUMERAL_LEN, MAX_VALUE, MIN_VALUE};
use arrayvec::ArrayString;

/// Stack buffer large enough for any canonical numeral.
pub type NumeralBuf = ArrayString<MAX_NUMERAL_LEN>;

/// Encode an integer into its canonical uppercase Roman numeral.
///
/// # Errors
/// Returns `OutOfRange` if `value` is not in `1..=3999`.
///
/// # Example
/// ```
/// use roman_numeral::encode;
///
/// assert_eq!(encode(1994).unwrap(), "MCMXCIV");
/// assert!(encode(0).is_err());
/// ```
pub fn encode(value: i64) -> NumeralResult<String> {
    encode_to_buf(value).map(|buf| buf.to_string())
}

/// Encode into a fixed-capacity stack buffer.
///
/// Same contract as [`encode`], without the heap allocation.
pub fn encode_to_buf(value: i64) -> NumeralResult<NumeralBuf> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(NumeralError::OutOfRange { value });
    }

    let mut remainder = value as u16;
    let mut numeral = NumeralBuf::new();
    for (symbol, amount) in LADDER {
        while remainder >= amount {
            remainder -= amount;
            numeral.push_str(symbol);
        }

        if remainder == 0 {
            break;
        }
    }

    Ok(numeral)
}
