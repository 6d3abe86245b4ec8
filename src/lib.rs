// ============================================================================
// Roman Numeral Library
// Validated conversion between integers and Roman numerals
// ============================================================================

//! # Roman Numeral
//!
//! Conversion between integers in `1..=3999` and Roman numerals.
//!
//! ## Features
//!
//! - **Greedy encoding** over a fixed symbol ladder, always canonical
//! - **Single-pass decoding**, case-insensitive, with positioned errors
//! - **Pluggable grammars** (lenient digit sums, strict canonical-only)
//! - **Event reporting** for logging and auditing conversions
//!
//! ## Example
//!
//! ```rust
//! use roman_numeral::{decode, encode, is_valid};
//! use roman_numeral::prelude::*;
//! use std::sync::Arc;
//!
//! assert_eq!(encode(2024).unwrap(), "MMXXIV");
//! assert_eq!(decode("mcmxciv").unwrap(), 1994);
//! assert!(!is_valid("MCMXQ"));
//!
//! // Strict converter rejects spellings the encoder would never produce
//! let converter = ConverterBuilder::new("years")
//!     .strict()
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! assert!(converter.is_valid("IV"));
//! assert!(!converter.is_valid("IIII"));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeral;

pub use numeral::{decode, encode, is_valid, NumeralError, NumeralResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConverterConfig, GrammarType, LetterCase, Roman};
    pub use crate::engine::{
        create_from_config, ConversionStats, Converter, ConverterBuilder, LenientGrammar,
        StrictGrammar,
    };
    pub use crate::interfaces::{
        ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, NumeralGrammar,
        RecordingEventHandler,
    };
    pub use crate::numeral::{decode, encode, is_valid, NumeralError, NumeralResult};
}
