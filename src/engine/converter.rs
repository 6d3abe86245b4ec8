// ============================================================================
// Converter
// Numeral conversion with a pluggable grammar and event reporting
// ============================================================================

use crate::domain::LetterCase;
use crate::interfaces::{ConversionEvent, EventHandler, NumeralGrammar};
use crate::numeral::{encode_to_buf, NumeralError, NumeralResult};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counts of conversions performed by a converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionStats {
    pub encoded: u64,
    pub decoded: u64,
    pub rejected: u64,
}

/// Converter with pluggable decoding grammar
pub struct Converter {
    /// Name used in log output
    label: Arc<String>,

    /// Pluggable decoding grammar
    grammar: Box<dyn NumeralGrammar>,

    /// Case of encoded output
    letter_case: LetterCase,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    encoded: AtomicU64,
    decoded: AtomicU64,
    rejected: AtomicU64,
}

impl Converter {
    /// Create a new converter
    pub fn new(
        label: String,
        grammar: Box<dyn NumeralGrammar>,
        letter_case: LetterCase,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            label: Arc::new(label),
            grammar,
            letter_case,
            event_handler,
            encoded: AtomicU64::new(0),
            decoded: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
        }
    }

    /// Encode an integer in the configured letter case
    ///
    /// # Errors
    /// Returns `OutOfRange` if `value` is not in `1..=3999`.
    pub fn encode(&self, value: i64) -> NumeralResult<String> {
        match encode_to_buf(value) {
            Ok(buf) => {
                let numeral = match self.letter_case {
                    LetterCase::Upper => buf.to_string(),
                    LetterCase::Lower => buf.to_ascii_lowercase(),
                };
                self.encoded.fetch_add(1, Ordering::Relaxed);
                self.event_handler.on_event(ConversionEvent::Encoded {
                    value,
                    numeral: numeral.clone(),
                    timestamp: Utc::now(),
                });
                Ok(numeral)
            },
            Err(error) => {
                self.reject(value.to_string(), &error);
                Err(error)
            },
        }
    }

    /// Decode a numeral under the configured grammar
    ///
    /// # Errors
    /// Whatever the grammar rejects `text` with.
    pub fn decode(&self, text: &str) -> NumeralResult<u64> {
        match self.grammar.decode(text) {
            Ok(value) => {
                self.decoded.fetch_add(1, Ordering::Relaxed);
                self.event_handler.on_event(ConversionEvent::Decoded {
                    numeral: text.to_string(),
                    value,
                    timestamp: Utc::now(),
                });
                Ok(value)
            },
            Err(error) => {
                self.reject(text.to_string(), &error);
                Err(error)
            },
        }
    }

    /// Returns true if the grammar accepts `text`
    ///
    /// Emits no events and leaves the counters unchanged.
    pub fn is_valid(&self, text: &str) -> bool {
        self.grammar.accepts(text)
    }

    /// Get conversion counts
    pub fn stats(&self) -> ConversionStats {
        ConversionStats {
            encoded: self.encoded.load(Ordering::Relaxed),
            decoded: self.decoded.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }

    /// Get label
    pub fn get_label(&self) -> &str {
        &self.label
    }

    /// Get the grammar name
    pub fn grammar_name(&self) -> &str {
        self.grammar.name()
    }

    /// Get output letter case
    pub fn letter_case(&self) -> LetterCase {
        self.letter_case
    }

    fn reject(&self, input: String, error: &NumeralError) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
        self.event_handler.on_event(ConversionEvent::Rejected {
            input,
            error: error.clone(),
            timestamp: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{LenientGrammar, StrictGrammar};
    use crate::interfaces::{NoOpEventHandler, RecordingEventHandler};

    fn lenient(handler: Arc<dyn EventHandler>) -> Converter {
        Converter::new(
            "test".to_string(),
            Box::new(LenientGrammar::new()),
            LetterCase::Upper,
            handler,
        )
    }

    #[test]
    fn test_converter_basic() {
        let converter = lenient(Arc::new(NoOpEventHandler));

        assert_eq!(converter.encode(1994).unwrap(), "MCMXCIV");
        assert_eq!(converter.decode("mcmxciv").unwrap(), 1994);
        assert!(converter.is_valid("IIII"));
        assert_eq!(converter.get_label(), "test");
        assert_eq!(converter.grammar_name(), "Lenient");
    }

    #[test]
    fn test_lowercase_output() {
        let converter = Converter::new(
            "pages".to_string(),
            Box::new(StrictGrammar::new()),
            LetterCase::Lower,
            Arc::new(NoOpEventHandler),
        );

        assert_eq!(converter.encode(14).unwrap(), "xiv");
        assert_eq!(converter.decode("xiv").unwrap(), 14);
        assert!(!converter.is_valid("iiii"));
    }

    #[test]
    fn test_events_emitted() {
        let handler = Arc::new(RecordingEventHandler::new());
        let converter = lenient(handler.clone());

        converter.encode(4).unwrap();
        converter.decode("IX").unwrap();
        converter.encode(0).unwrap_err();
        converter.decode("").unwrap_err();

        let events = handler.events();
        assert_eq!(events.len(), 4);
        assert!(matches!(
            &events[0],
            ConversionEvent::Encoded { value: 4, numeral, .. } if numeral == "IV"
        ));
        assert!(matches!(&events[1], ConversionEvent::Decoded { value: 9, .. }));
        assert!(matches!(
            &events[2],
            ConversionEvent::Rejected { input, error: NumeralError::OutOfRange { value: 0 }, .. }
                if input == "0"
        ));
        assert!(matches!(
            &events[3],
            ConversionEvent::Rejected { error: NumeralError::EmptyInput, .. }
        ));
    }

    #[test]
    fn test_is_valid_is_silent() {
        let handler = Arc::new(RecordingEventHandler::new());
        let converter = lenient(handler.clone());

        assert!(converter.is_valid("XIV"));
        assert!(!converter.is_valid("XQV"));
        assert!(handler.is_empty());
        assert_eq!(converter.stats(), ConversionStats::default());
    }

    #[test]
    fn test_stats() {
        let converter = lenient(Arc::new(NoOpEventHandler));

        for value in 1..=10 {
            converter.encode(value).unwrap();
        }
        converter.decode("XX").unwrap();
        converter.decode("ABC").unwrap_err();

        assert_eq!(
            converter.stats(),
            ConversionStats {
                encoded: 10,
                decoded: 1,
                rejected: 1,
            }
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let converter = Arc::new(lenient(Arc::new(NoOpEventHandler)));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let converter = Arc::clone(&converter);
                std::thread::spawn(move || {
                    for value in 1..=100 {
                        let numeral = converter.encode(value + t * 100).unwrap();
                        assert_eq!(converter.decode(&numeral).unwrap() as i64, value + t * 100);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let stats = converter.stats();
        assert_eq!(stats.encoded, 400);
        assert_eq!(stats.decoded, 400);
    }
}
