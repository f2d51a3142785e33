//! Durable rolling file sink.
//!
//! Writes one line per event to a day-partitioned text file
//! (`<prefix>.<YYYY-MM-DD>.txt`) through `tracing-appender`'s rolling
//! appender. Writes go through its non-blocking worker in non-lossy mode, so
//! a slow disk never drops events; [`LogSink::close`] drains the worker.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde_json::{Map, Value};
use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use super::{LogEvent, LogSink, SinkError};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %:z";

struct Writer {
    inner: NonBlocking,
    // Dropping the guard flushes the worker and joins it.
    _guard: WorkerGuard,
}

/// Daily rolling text file sink.
pub struct RollingFileSink {
    directory: PathBuf,
    writer: Mutex<Option<Writer>>,
}

impl RollingFileSink {
    /// Opens a daily rolling file under `directory`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the directory cannot be created or the
    /// appender cannot open its first file. Callers treat this as fatal at
    /// startup.
    pub fn daily(directory: impl AsRef<Path>, file_prefix: &str) -> Result<Self, SinkError> {
        let directory = directory.as_ref().to_path_buf();
        std::fs::create_dir_all(&directory)?;

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(file_prefix)
            .filename_suffix("txt")
            .build(&directory)
            .map_err(|e| SinkError::Init(e.to_string()))?;

        let (inner, guard) = NonBlockingBuilder::default()
            .lossy(false)
            .thread_name("log-file-writer")
            .finish(appender);

        Ok(Self {
            directory,
            writer: Mutex::new(Some(Writer {
                inner,
                _guard: guard,
            })),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn lock(&self) -> MutexGuard<'_, Option<Writer>> {
        self.writer.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Formats an event as a single durable log line.
pub fn format_line(event: &LogEvent) -> String {
    let mut line = format!(
        "{} [{}] {}",
        event.timestamp().format(TIMESTAMP_FORMAT),
        event.level().short_code(),
        event.render()
    );

    if !event.properties().is_empty() {
        let mut map = Map::new();
        for property in event.properties() {
            map.insert(property.name.clone(), property.value.clone());
        }
        line.push(' ');
        line.push_str(&Value::Object(map).to_string());
    }

    line.push('\n');
    line
}

impl LogSink for RollingFileSink {
    fn emit(&self, event: &LogEvent) -> Result<(), SinkError> {
        let mut guard = self.lock();
        let writer = guard.as_mut().ok_or(SinkError::Closed)?;
        writer.inner.write_all(format_line(event).as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), SinkError> {
        if let Some(writer) = self.lock().as_mut() {
            writer.inner.flush()?;
        }
        Ok(())
    }

    fn close(&self) -> Result<(), SinkError> {
        let writer = self.lock().take();
        drop(writer);
        Ok(())
    }
}
