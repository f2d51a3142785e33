//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `BrainstormSessionRepository` - Session and idea persistence

mod session_repository;

pub use session_repository::BrainstormSessionRepository;
