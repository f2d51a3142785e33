//! Brainstorm Sessions - brainstorm session and idea tracking web application
//!
//! Controllers log through an injected, structured [`logging::Logger`] that
//! fans each event out to every configured sink, so the same events reach
//! the console, the daily rolling file and test captures alike.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
