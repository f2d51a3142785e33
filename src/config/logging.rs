//! Logging pipeline configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::ValidationError;
use crate::logging::{LogLevel, Logger, RollingFileSink, SinkError, TracingSink};

/// Where and how much the application logger writes
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Directory holding the daily rolling log files
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File name prefix; files are named `<prefix>.<date>.txt`
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Least severe level delivered to sinks
    #[serde(default)]
    pub minimum_level: LogLevel,

    /// Forward events to the `tracing` console subscriber
    #[serde(default = "default_true")]
    pub console: bool,

    /// Write events to the rolling file
    #[serde(default = "default_true")]
    pub file: bool,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.file {
            return Ok(());
        }
        if self.directory.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("logging.directory"));
        }
        if self.file_prefix.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.file_prefix"));
        }
        Ok(())
    }

    /// Builds the application logger from the enabled sinks.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Init` if the log directory cannot be created.
    pub fn build_logger(&self) -> Result<Logger, SinkError> {
        let mut builder = Logger::builder().minimum_level(self.minimum_level);
        if self.console {
            builder = builder.write_to(Arc::new(TracingSink::new()));
        }
        if self.file {
            let sink = RollingFileSink::daily(&self.directory, &self.file_prefix)?;
            builder = builder.write_to(Arc::new(sink));
        }
        Ok(builder.build())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            file_prefix: default_file_prefix(),
            minimum_level: LogLevel::default(),
            console: true,
            file: true,
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("logs")
}

fn default_file_prefix() -> String {
    "log".to_string()
}

fn default_true() -> bool {
    true
}
