//! In-memory capture sink.
//!
//! Append-only record of every event it receives, queryable after the fact.
//! Tests install a fresh one per fixture and read it back by level.

use std::sync::{Mutex, MutexGuard};

use super::{LogEvent, LogLevel, LogSink, SinkError};

/// Append-only, queryable event record.
///
/// # Example
///
/// ```ignore
/// let sink = Arc::new(InMemorySink::new());
/// let logger = Logger::builder().write_to(sink.clone()).build();
///
/// logger.warning("Invalid model state");
///
/// assert!(sink.any(LogLevel::Warning));
/// assert_eq!(sink.count(LogLevel::Warning), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySink {
    events: Mutex<Vec<LogEvent>>,
    capacity: Option<usize>,
}

impl InMemorySink {
    /// Creates an unbounded sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that rejects events once `capacity` are stored.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Mutex::new(Vec::with_capacity(capacity)),
            capacity: Some(capacity),
        }
    }

    // A poisoned lock only means another writer panicked mid-push; the
    // vector itself is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of all recorded events in emission order.
    pub fn events(&self) -> Vec<LogEvent> {
        self.lock().clone()
    }

    /// Snapshot of recorded events at exactly `level`.
    pub fn events_at(&self, level: LogLevel) -> Vec<LogEvent> {
        self.lock()
            .iter()
            .filter(|e| e.level() == level)
            .cloned()
            .collect()
    }

    /// Number of recorded events at exactly `level`.
    pub fn count(&self, level: LogLevel) -> usize {
        self.lock().iter().filter(|e| e.level() == level).count()
    }

    /// Whether any recorded event is at exactly `level`.
    pub fn any(&self, level: LogLevel) -> bool {
        self.lock().iter().any(|e| e.level() == level)
    }

    /// Rendered messages of all recorded events.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(LogEvent::render).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops every recorded event.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl LogSink for InMemorySink {
    fn emit(&self, event: &LogEvent) -> Result<(), SinkError> {
        let mut events = self.lock();
        if let Some(capacity) = self.capacity {
            if events.len() >= capacity {
                return Err(SinkError::CapacityExceeded(capacity));
            }
        }
        events.push(event.clone());
        Ok(())
    }
}
