// ============================================================================
// Numeral Grammar Interface
// Defines the contract for pluggable decoding grammars
// ============================================================================

use crate::numeral::NumeralResult;

/// Strategy pattern interface for numeral grammars
/// Implementations: Lenient (digit sums), Strict (canonical spelling only)
pub trait NumeralGrammar: Send + Sync {
    /// Decode a numeral under this grammar
    ///
    /// # Arguments
    /// * `text` - The numeral, in either letter case
    ///
    /// # Returns
    /// The integer value, or the reason the grammar rejects `text`
    fn decode(&self, text: &str) -> NumeralResult<u64>;

    /// Get the grammar name for logging
    fn name(&self) -> &str;

    /// Returns true if this grammar accepts `text`
    fn accepts(&self, text: &str) -> bool {
        self.decode(text).is_ok()
    }
}
