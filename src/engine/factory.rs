// ============================================================================
// Converter Factory
// Creates converters with proper configuration
// ============================================================================

use crate::domain::config::{ConverterConfig, GrammarType, LetterCase};
use crate::engine::{Converter, LenientGrammar, StrictGrammar};
use crate::interfaces::{EventHandler, NumeralGrammar};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a converter from configuration
///
/// # Arguments
/// * `config` - Converter configuration
/// * `event_handler` - Event handler for conversion events
///
/// # Returns
/// * `Result<Converter, String>` - Configured converter or error
///
/// # Example
/// ```
/// use roman_numeral::prelude::*;
/// use roman_numeral::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = ConverterConfig::strict("years".to_string());
/// let converter = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert!(!converter.is_valid("IIII"));
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Converter, String> {
    // Validate configuration first
    config.validate()?;

    let grammar = create_grammar(config.grammar);

    tracing::debug!(
        label = %config.label,
        grammar = grammar.name(),
        letter_case = ?config.letter_case,
        "Creating converter"
    );

    Ok(Converter::new(
        config.label,
        grammar,
        config.letter_case,
        event_handler,
    ))
}

/// Creates the decoding grammar for a grammar type
fn create_grammar(grammar_type: GrammarType) -> Box<dyn NumeralGrammar> {
    match grammar_type {
        GrammarType::Lenient => Box::new(LenientGrammar::new()),
        GrammarType::Strict => Box::new(StrictGrammar::new()),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use roman_numeral::prelude::*;
/// use roman_numeral::engine::factory::ConverterBuilder;
/// use std::sync::Arc;
///
/// let converter = ConverterBuilder::new("pages")
///     .strict()
///     .lowercase()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(converter.encode(14).unwrap(), "xiv");
/// ```
pub struct ConverterBuilder {
    config: ConverterConfig,
}

impl ConverterBuilder {
    /// Create a new builder with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            config: ConverterConfig::lenient(label.into()),
        }
    }

    // ========================================================================
    // Grammar Configuration
    // ========================================================================

    /// Accept any sequence of Roman digits (default)
    pub fn lenient(mut self) -> Self {
        self.config.grammar = GrammarType::Lenient;
        self
    }

    /// Accept only canonical numerals
    pub fn strict(mut self) -> Self {
        self.config.grammar = GrammarType::Strict;
        self
    }

    // ========================================================================
    // Output Configuration
    // ========================================================================

    /// Encode in uppercase (default)
    pub fn uppercase(mut self) -> Self {
        self.config.letter_case = LetterCase::Upper;
        self
    }

    /// Encode in lowercase
    pub fn lowercase(mut self) -> Self {
        self.config.letter_case = LetterCase::Lower;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply strict uppercase configuration
    pub fn strict_preset(label: impl Into<String>) -> Self {
        Self {
            config: ConverterConfig::strict(label.into()),
        }
    }

    /// Apply strict lowercase configuration
    pub fn minuscule_preset(label: impl Into<String>) -> Self {
        Self {
            config: ConverterConfig::minuscule(label.into()),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Converter, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}
