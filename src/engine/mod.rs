// ============================================================================
// Engine Module
// Contains the grammars and the converter
// ============================================================================

mod converter;
mod lenient;
mod strict;

pub mod factory;

pub use converter::{ConversionStats, Converter};
pub use factory::{create_from_config, ConverterBuilder};
pub use lenient::LenientGrammar;
pub use strict::StrictGrammar;
