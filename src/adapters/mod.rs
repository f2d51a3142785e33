//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum routes and response mapping
//! - `memory` - in-memory session repository

pub mod http;
pub mod memory;

pub use http::{build_app, AppControllers};
pub use memory::InMemorySessionRepository;
