// ============================================================================
// Lenient Grammar
// Accepts any sequence of Roman digits
// ============================================================================

use crate::interfaces::NumeralGrammar;
use crate::numeral::{decode, NumeralResult};

/// Lenient grammar: the plain positional-subtraction decoder
///
/// Every string made only of `I V X L C D M` (in either case) decodes.
/// Non-canonical spellings are summed rather than rejected.
///
/// # Example
/// ```text
/// XIV   -> 14
/// IIII  -> 4
/// IIV   -> 5
/// MMMM  -> 4000
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientGrammar;

impl LenientGrammar {
    pub fn new() -> Self {
        Self
    }
}

impl NumeralGrammar for LenientGrammar {
    fn decode(&self, text: &str) -> NumeralResult<u64> {
        decode(text)
    }

    fn name(&self) -> &str {
        "Lenient"
    }
}
