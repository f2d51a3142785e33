//! Log sink port.
//!
//! A sink receives every event the pipeline lets through. Each sink owns its
//! own record of what it consumed and serializes its own writes; the logger
//! never holds a lock across sinks.

use thiserror::Error;

use super::LogEvent;

/// Errors a sink can report for a single delivery or flush.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Sink capacity of {0} events exceeded")]
    CapacityExceeded(usize),

    #[error("Sink is closed")]
    Closed,

    #[error("Sink I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sink initialization failed: {0}")]
    Init(String),
}

/// Destination for emitted log events.
pub trait LogSink: Send + Sync {
    /// Records one event. Errors are reported to the logger, which swallows them.
    fn emit(&self, event: &LogEvent) -> Result<(), SinkError>;

    /// Pushes any buffered events to their destination.
    fn flush(&self) -> Result<(), SinkError> {
        Ok(())
    }

    /// Flushes and releases the destination. Later events may be rejected.
    fn close(&self) -> Result<(), SinkError> {
        self.flush()
    }
}
