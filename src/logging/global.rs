//! Process-wide logger slot.
//!
//! The binary installs its logger here at startup so that code without an
//! injected handle (startup and shutdown messages) can still log. Request
//! handling receives its logger by injection instead.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use super::Logger;

static GLOBAL: Lazy<RwLock<Logger>> = Lazy::new(|| RwLock::new(Logger::silent()));

fn read() -> RwLockReadGuard<'static, Logger> {
    GLOBAL.read().unwrap_or_else(|e| e.into_inner())
}

fn write() -> RwLockWriteGuard<'static, Logger> {
    GLOBAL.write().unwrap_or_else(|e| e.into_inner())
}

/// Replaces the process-wide logger and returns the previous one.
///
/// The previous logger is neither flushed nor closed; handles cloned from it
/// keep writing to its own sinks.
pub fn configure(logger: Logger) -> Logger {
    std::mem::replace(&mut *write(), logger)
}

/// Handle to the current process-wide logger.
pub fn logger() -> Logger {
    read().clone()
}

/// Flushes and closes the current process-wide logger, then resets the slot
/// to a silent logger.
pub fn close_and_flush() {
    let previous = configure(Logger::silent());
    previous.close_and_flush();
}
