//! Structured logging pipeline.
//!
//! One emission interface, many sinks. Every event goes synchronously to
//! each registered sink:
//!
//! - `InMemorySink` - queryable capture used by tests
//! - `RollingFileSink` - durable, day-partitioned text log
//! - `TracingSink` - forwards into the `tracing` subscriber stack
//!
//! Controllers receive a [`Logger`] by injection. The [`global`] slot holds
//! the process-wide logger used for startup and shutdown.

mod event;
mod file_sink;
pub mod global;
mod level;
mod logger;
mod memory_sink;
mod sink;
mod tracing_bridge;

pub use event::{LogEvent, Property};
pub use file_sink::{format_line, RollingFileSink};
pub use global::{close_and_flush, configure, logger};
pub use level::{LogLevel, ParseLevelError};
pub use logger::{Logger, LoggerBuilder};
pub use memory_sink::InMemorySink;
pub use sink::{LogSink, SinkError};
pub use tracing_bridge::{CapturedEvent, TracingCapture, TracingSink, EVENT_TARGET};
