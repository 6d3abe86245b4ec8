// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversions
// ============================================================================

use crate::numeral::NumeralError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a converter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// Integer encoded to a numeral
    Encoded {
        value: i64,
        numeral: String,
        timestamp: DateTime<Utc>,
    },

    /// Numeral decoded to an integer
    Decoded {
        numeral: String,
        value: u64,
        timestamp: DateTime<Utc>,
    },

    /// Conversion failed
    Rejected {
        input: String,
        error: NumeralError,
        timestamp: DateTime<Utc>,
    },
}

impl ConversionEvent {
    /// Returns true for `Rejected` events
    pub fn is_rejection(&self) -> bool {
        matches!(self, ConversionEvent::Rejected { .. })
    }

    /// When the event happened
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ConversionEvent::Encoded { timestamp, .. }
            | ConversionEvent::Decoded { timestamp, .. }
            | ConversionEvent::Rejected { timestamp, .. } => *timestamp,
        }
    }
}

/// Event handler trait for processing converter events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::Rejected { input, error, .. } => {
                tracing::debug!(input = %input, error = %error, "Conversion rejected");
            },
            _ => tracing::debug!("Converter event: {:?}", event),
        }
    }
}

/// Keeps every event in memory, for tests and audit trails
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<ConversionEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events seen so far, oldest first
    pub fn events(&self) -> Vec<ConversionEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the events seen so far
    pub fn drain(&self) -> Vec<ConversionEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<ConversionEvent>) {
        self.events.lock().extend(events);
    }
}
