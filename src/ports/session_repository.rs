//! Brainstorm session repository port.
//!
//! Defines the contract for persisting and retrieving sessions together
//! with their ideas. Implementations handle the actual storage.

use crate::domain::foundation::DomainError;
use crate::domain::session::{BrainstormSession, Idea};
use async_trait::async_trait;

/// Repository port for brainstorm sessions.
#[async_trait]
pub trait BrainstormSessionRepository: Send + Sync {
    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn get_by_id(&self, id: i64) -> Result<Option<BrainstormSession>, DomainError>;

    /// List all sessions.
    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError>;

    /// Save a new session, assigning its id.
    ///
    /// Returns the stored session.
    async fn add(&self, session: BrainstormSession) -> Result<BrainstormSession, DomainError>;

    /// Replace an existing session, ideas included.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    async fn update(&self, session: &BrainstormSession) -> Result<(), DomainError>;

    /// Append `idea` to a stored session in one step, assigning its id.
    ///
    /// Concurrent appends to the same session must all be kept. Returns the
    /// session as stored after the append, or `None` if it doesn't exist.
    async fn add_idea(
        &self,
        session_id: i64,
        idea: Idea,
    ) -> Result<Option<BrainstormSession>, DomainError>;
}
