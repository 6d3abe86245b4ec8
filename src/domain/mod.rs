// ============================================================================
// Domain Models Module
// Contains the value types and configuration of the converter
// ============================================================================

pub mod config;
pub mod roman;

pub use config::{ConverterConfig, GrammarType, LetterCase};
pub use roman::Roman;
