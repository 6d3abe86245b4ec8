// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod numeral_grammar;

pub use event_handler::{
    ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
};
pub use numeral_grammar::NumeralGrammar;
