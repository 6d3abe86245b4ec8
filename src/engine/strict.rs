// ============================================================================
// Strict Grammar
// Accepts only the canonical spelling of each value
// ============================================================================

use crate::interfaces::NumeralGrammar;
use crate::numeral::{decode, encode_to_buf, normalize, NumeralError, NumeralResult};

/// Strict grammar: a numeral is valid only if it is exactly what the encoder
/// would produce for its value (ignoring letter case).
///
/// This rules out repeated digits beyond three, subtractive pairs that
/// genuine numerals never use, and values above 3999.
///
/// # Example
/// ```text
/// XIV   -> 14
/// xiv   -> 14
/// IIII  -> NonCanonical (expected IV)
/// IC    -> NonCanonical (expected XCIX)
/// MMMM  -> NonCanonical
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictGrammar;

impl StrictGrammar {
    pub fn new() -> Self {
        Self
    }
}

impl NumeralGrammar for StrictGrammar {
    fn decode(&self, text: &str) -> NumeralResult<u64> {
        let value = decode(text)?;
        let normalized = normalize(text);

        let canonical = i64::try_from(value)
            .ok()
            .and_then(|value| encode_to_buf(value).ok());

        match canonical {
            Some(canonical) if canonical.as_str() == normalized => Ok(value),
            canonical => Err(NumeralError::NonCanonical {
                source: normalized,
                canonical: canonical.map(|c| c.to_string()),
            }),
        }
    }

    fn name(&self) -> &str {
        "Strict"
    }
}
