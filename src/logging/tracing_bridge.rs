//! Bridge between the logger and the `tracing` ecosystem.
//!
//! [`TracingSink`] forwards every event to the current `tracing` dispatcher,
//! so the operational subscriber stack (console formatting, env filters)
//! sees the same events as the other sinks. [`TracingCapture`] is a
//! `tracing-subscriber` layer that records what reaches the dispatcher; it
//! gives tests a second, independent observation path.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use super::{LogEvent, LogLevel, LogSink, SinkError};

/// `tracing` target used for forwarded events.
pub const EVENT_TARGET: &str = "brainstorm_sessions::events";

/// Sink that re-emits events as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

fn properties_json(event: &LogEvent) -> String {
    let mut map = Map::new();
    for property in event.properties() {
        map.insert(property.name.clone(), property.value.clone());
    }
    Value::Object(map).to_string()
}

impl LogSink for TracingSink {
    fn emit(&self, event: &LogEvent) -> Result<(), SinkError> {
        let message = event.render();
        let template = event.message_template();
        let properties = properties_json(event);

        match event.level() {
            LogLevel::Debug => tracing::debug!(
                target: EVENT_TARGET,
                template,
                properties = %properties,
                "{}",
                message
            ),
            LogLevel::Information => tracing::info!(
                target: EVENT_TARGET,
                template,
                properties = %properties,
                "{}",
                message
            ),
            LogLevel::Warning => tracing::warn!(
                target: EVENT_TARGET,
                template,
                properties = %properties,
                "{}",
                message
            ),
            LogLevel::Error => tracing::error!(
                target: EVENT_TARGET,
                template,
                properties = %properties,
                "{}",
                message
            ),
        }
        Ok(())
    }
}

/// An event observed by [`TracingCapture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

/// `tracing-subscriber` layer recording every event it sees.
#[derive(Debug, Clone, Default)]
pub struct TracingCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TracingCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a fresh capture as the thread-local default subscriber.
    ///
    /// The capture stays active until the returned guard is dropped.
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::new();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedEvent>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        self.lock().clone()
    }

    /// Number of events at `level` forwarded by [`TracingSink`].
    pub fn count(&self, level: LogLevel) -> usize {
        self.lock()
            .iter()
            .filter(|e| e.level == level && e.target == EVENT_TARGET)
            .count()
    }

    /// Whether any event at `level` was forwarded by [`TracingSink`].
    pub fn any(&self, level: LogLevel) -> bool {
        self.count(level) > 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }
}

impl<S: Subscriber> Layer<S> for TracingCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.lock().push(CapturedEvent {
            level: LogLevel::from_tracing_level(metadata.level()),
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Logger;

    #[test]
    fn forwarded_events_reach_the_capture_layer() {
        let (capture, _guard) = TracingCapture::install();
        let logger = Logger::builder().write_to(Arc::new(TracingSink)).build();

        logger
            .for_context("Id", 1)
            .debug("Executing Index action for {Id}");
        logger.warning("careful");

        assert_eq!(capture.count(LogLevel::Debug), 1);
        assert!(capture.any(LogLevel::Warning));
        assert!(!capture.any(LogLevel::Error));
        assert_eq!(capture.events()[0].message, "Executing Index action for 1");
        assert_eq!(capture.events()[0].target, EVENT_TARGET);
    }

    #[test]
    fn unrelated_tracing_events_are_not_counted() {
        let (capture, _guard) = TracingCapture::install();

        tracing::error!("not from the logger");

        assert_eq!(capture.events().len(), 1);
        assert_eq!(capture.count(LogLevel::Error), 0);
    }

    #[test]
    fn captures_are_isolated_per_install() {
        {
            let (capture, _guard) = TracingCapture::install();
            Logger::builder()
                .write_to(Arc::new(TracingSink))
                .build()
                .information("first");
            assert_eq!(capture.count(LogLevel::Information), 1);
        }

        let (capture, _guard) = TracingCapture::install();
        assert!(capture.events().is_empty());
    }
}
