//! In-memory session repository.
//!
//! Backs the running server and the integration tests. Data lives for the
//! lifetime of the process.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::session::{BrainstormSession, Idea};
use crate::ports::BrainstormSessionRepository;

/// Process-local session store.
pub struct InMemorySessionRepository {
    sessions: RwLock<Vec<BrainstormSession>>,
    next_id: AtomicI64,
}

impl InMemorySessionRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::with_sessions(Vec::new())
    }

    /// Creates a repository holding the given sessions as already stored.
    ///
    /// New sessions get ids after the highest one supplied.
    pub fn with_sessions(sessions: Vec<BrainstormSession>) -> Self {
        let max_id = sessions.iter().map(BrainstormSession::id).max().unwrap_or(0);
        Self {
            sessions: RwLock::new(sessions),
            next_id: AtomicI64::new(max_id + 1),
        }
    }

    /// Creates a repository with the demo session the server starts with.
    pub fn seeded() -> Self {
        let today = Timestamp::now();
        let mut session = BrainstormSession::new("Test Session 1", today).with_id(1);
        session.add_idea(Idea::new("Awesome idea", "Totally awesome idea", today));
        session.add_idea(Idea::new("Another idea", "Another awesome idea", today));
        session.add_idea(Idea::new("Still another idea", "Still another awesome idea", today));
        Self::with_sessions(vec![session])
    }

    /// Number of stored sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrainstormSessionRepository for InMemorySessionRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<BrainstormSession>, DomainError> {
        Ok(self
            .sessions
            .read()
            .await
            .iter()
            .find(|s| s.id() == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError> {
        Ok(self.sessions.read().await.clone())
    }

    async fn add(&self, session: BrainstormSession) -> Result<BrainstormSession, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = session.with_id(id);
        self.sessions.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, session: &BrainstormSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.iter_mut().find(|s| s.id() == session.id()) {
            Some(existing) => {
                *existing = session.clone();
                Ok(())
            }
            None => Err(DomainError::session_not_found(session.id())),
        }
    }

    async fn add_idea(
        &self,
        session_id: i64,
        idea: Idea,
    ) -> Result<Option<BrainstormSession>, DomainError> {
        let mut sessions = self.sessions.write().await;
        let Some(session) = sessions.iter_mut().find(|s| s.id() == session_id) else {
            return Ok(None);
        };
        session.add_idea(idea);
        Ok(Some(session.clone()))
    }
}
