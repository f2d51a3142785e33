//! In-memory adapters.

mod session_repository;

pub use session_repository::InMemorySessionRepository;
