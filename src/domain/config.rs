// ============================================================================
// Converter Configuration
// Decoding grammar and output formatting for a converter
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Grammar Type
// ============================================================================

/// Defines which numerals the decoder accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GrammarType {
    /// Any sequence of Roman digits, summed with subtractive pairs
    /// - Accepts: `XIV`, `IIII`, `IIV`, `MMMM`
    /// - Use case: tolerant input, legacy data
    #[default]
    Lenient,

    /// Only the canonical spelling produced by the encoder
    /// - Accepts: `XIV`, `xiv`
    /// - Rejects: `IIII`, `IIV`, `VX`, `MMMM`
    Strict,
}

// ============================================================================
// Letter Case
// ============================================================================

/// Letter case of encoded numerals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterCase {
    /// `MCMXCIV`
    #[default]
    Upper,
    /// `mcmxciv`, as used for front-matter page numbers
    Lower,
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for creating a converter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Name attached to the converter's log output
    pub label: String,

    /// Decoding grammar
    pub grammar: GrammarType,

    /// Case of encoded output
    pub letter_case: LetterCase,
}

impl ConverterConfig {
    /// Create a new configuration with required parameters
    pub fn new(label: String, grammar: GrammarType, letter_case: LetterCase) -> Self {
        Self {
            label,
            grammar,
            letter_case,
        }
    }

    /// Builder method: Set decoding grammar
    pub fn with_grammar(mut self, grammar: GrammarType) -> Self {
        self.grammar = grammar;
        self
    }

    /// Builder method: Set output letter case
    pub fn with_letter_case(mut self, letter_case: LetterCase) -> Self {
        self.letter_case = letter_case;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.label.is_empty() {
            return Err("Label cannot be empty".to_string());
        }

        if self.label.trim() != self.label {
            return Err("Label cannot have leading or trailing whitespace".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Lenient decoding, uppercase output
    pub fn lenient(label: String) -> Self {
        Self::new(label, GrammarType::Lenient, LetterCase::Upper)
    }

    /// Canonical-only decoding, uppercase output
    pub fn strict(label: String) -> Self {
        Self::new(label, GrammarType::Strict, LetterCase::Upper)
    }

    /// Canonical-only decoding, lowercase output
    pub fn minuscule(label: String) -> Self {
        Self::new(label, GrammarType::Strict, LetterCase::Lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = ConverterConfig::new(
            "dates".to_string(),
            GrammarType::Lenient,
            LetterCase::Upper,
        );

        assert_eq!(config.label, "dates");
        assert_eq!(config.grammar, GrammarType::Lenient);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ConverterConfig::lenient("pages".to_string())
            .with_grammar(GrammarType::Strict)
            .with_letter_case(LetterCase::Lower);

        assert_eq!(config, ConverterConfig::minuscule("pages".to_string()));
    }

    #[test]
    fn test_validation() {
        let empty = ConverterConfig::lenient("".to_string());
        assert!(empty.validate().is_err());

        let padded = ConverterConfig::lenient(" pages ".to_string());
        assert!(padded.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        let strict = ConverterConfig::strict("years".to_string());
        assert!(matches!(strict.grammar, GrammarType::Strict));
        assert!(matches!(strict.letter_case, LetterCase::Upper));

        let minuscule = ConverterConfig::minuscule("pages".to_string());
        assert!(matches!(minuscule.letter_case, LetterCase::Lower));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(GrammarType::default(), GrammarType::Lenient);
        assert_eq!(LetterCase::default(), LetterCase::Upper);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde() {
        let config = ConverterConfig::strict("years".to_string());
        let json = serde_json::to_string(&config).unwrap();
        let back: ConverterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
