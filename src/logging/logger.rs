//! Fan-out logger.
//!
//! A [`Logger`] is a cheap, cloneable handle over a shared pipeline (the sink
//! set, the minimum level, and the closed flag) plus its own context
//! properties. [`Logger::for_context`] derives a new handle without touching
//! the parent.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use brainstorm_sessions::logging::{InMemorySink, LogLevel, Logger};
//!
//! let sink = Arc::new(InMemorySink::new());
//! let logger = Logger::builder()
//!     .minimum_level(LogLevel::Debug)
//!     .write_to(sink.clone())
//!     .build();
//!
//! logger.for_context("Id", 1).debug("Executing Index action");
//! assert_eq!(sink.count(LogLevel::Debug), 1);
//! ```

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;

use super::{LogEvent, LogLevel, LogSink, Property, SinkError};

struct Pipeline {
    sinks: Vec<Arc<dyn LogSink>>,
    minimum_level: LogLevel,
    closed: AtomicBool,
    failed_deliveries: AtomicU64,
}

/// Handle for emitting structured events to every registered sink.
#[derive(Clone)]
pub struct Logger {
    pipeline: Arc<Pipeline>,
    context: Arc<[Property]>,
}

impl Logger {
    /// Creates a logger over the given sinks.
    pub fn new(sinks: Vec<Arc<dyn LogSink>>, minimum_level: LogLevel) -> Self {
        Self {
            pipeline: Arc::new(Pipeline {
                sinks,
                minimum_level,
                closed: AtomicBool::new(false),
                failed_deliveries: AtomicU64::new(0),
            }),
            context: Arc::from(Vec::<Property>::new()),
        }
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// A logger with no sinks. Every event is discarded.
    pub fn silent() -> Self {
        Self::new(Vec::new(), LogLevel::Error)
    }

    /// Derives a logger that attaches `name = value` to every event.
    pub fn for_context(&self, name: impl Into<String>, value: impl Into<Value>) -> Logger {
        let mut context = self.context.to_vec();
        context.push(Property::new(name, value));
        Logger {
            pipeline: Arc::clone(&self.pipeline),
            context: Arc::from(context),
        }
    }

    /// Context properties bound to this handle.
    pub fn context(&self) -> &[Property] {
        &self.context
    }

    pub fn minimum_level(&self) -> LogLevel {
        self.pipeline.minimum_level
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.pipeline.minimum_level && !self.is_closed()
    }

    pub fn is_closed(&self) -> bool {
        self.pipeline.closed.load(Ordering::Acquire)
    }

    /// Number of deliveries a sink rejected or panicked on since the
    /// pipeline was built.
    pub fn failed_deliveries(&self) -> u64 {
        self.pipeline.failed_deliveries.load(Ordering::Relaxed)
    }

    /// Delivers an event to every sink before returning.
    ///
    /// Events below the minimum level, or emitted after
    /// [`close_and_flush`](Self::close_and_flush), are dropped. A sink that
    /// fails or panics does not prevent delivery to the sinks after it.
    pub fn emit(&self, level: LogLevel, template: &str, properties: Vec<Property>) {
        if !self.is_enabled(level) {
            return;
        }

        let mut all = Vec::with_capacity(self.context.len() + properties.len());
        all.extend(self.context.iter().cloned());
        all.extend(properties);
        let event = LogEvent::new(level, template, all);

        for sink in &self.pipeline.sinks {
            self.deliver(|| sink.emit(&event));
        }
    }

    /// Runs one sink call, counting an error or a panic as a failed delivery.
    fn deliver(&self, call: impl FnOnce() -> Result<(), SinkError>) {
        if !matches!(catch_unwind(AssertUnwindSafe(call)), Ok(Ok(()))) {
            self.pipeline
                .failed_deliveries
                .fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn debug(&self, template: &str) {
        self.emit(LogLevel::Debug, template, Vec::new());
    }

    pub fn debug_with(&self, template: &str, properties: Vec<Property>) {
        self.emit(LogLevel::Debug, template, properties);
    }

    pub fn information(&self, template: &str) {
        self.emit(LogLevel::Information, template, Vec::new());
    }

    pub fn information_with(&self, template: &str, properties: Vec<Property>) {
        self.emit(LogLevel::Information, template, properties);
    }

    pub fn warning(&self, template: &str) {
        self.emit(LogLevel::Warning, template, Vec::new());
    }

    pub fn warning_with(&self, template: &str, properties: Vec<Property>) {
        self.emit(LogLevel::Warning, template, properties);
    }

    pub fn error(&self, template: &str) {
        self.emit(LogLevel::Error, template, Vec::new());
    }

    pub fn error_with(&self, template: &str, properties: Vec<Property>) {
        self.emit(LogLevel::Error, template, properties);
    }

    /// Flushes every sink and closes the pipeline.
    ///
    /// Shared by every handle derived from the same builder. Flush errors
    /// are counted like delivery errors.
    pub fn close_and_flush(&self) {
        if self.pipeline.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        for sink in &self.pipeline.sinks {
            self.deliver(|| sink.close());
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::silent()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sinks", &self.pipeline.sinks.len())
            .field("minimum_level", &self.pipeline.minimum_level)
            .field("context", &self.context)
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Collects sinks and a minimum level into a [`Logger`].
#[derive(Default)]
pub struct LoggerBuilder {
    sinks: Vec<Arc<dyn LogSink>>,
    minimum_level: LogLevel,
}

impl LoggerBuilder {
    pub fn minimum_level(mut self, level: LogLevel) -> Self {
        self.minimum_level = level;
        self
    }

    /// Registers a sink. Sinks receive events in registration order.
    pub fn write_to(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn build(self) -> Logger {
        Logger::new(self.sinks, self.minimum_level)
    }
}
