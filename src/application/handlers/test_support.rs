//! Shared fixtures for handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::adapters::memory::InMemorySessionRepository;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::session::{BrainstormSession, Idea};
use crate::logging::{InMemorySink, LogLevel, Logger};
use crate::ports::BrainstormSessionRepository;

pub fn test_sessions() -> Vec<BrainstormSession> {
    vec![
        BrainstormSession::new("Test One", Timestamp::from_ymd(2016, 7, 2).unwrap()).with_id(1),
        BrainstormSession::new("Test Two", Timestamp::from_ymd(2016, 7, 1).unwrap()).with_id(2),
    ]
}

pub fn test_repository() -> Arc<InMemorySessionRepository> {
    Arc::new(InMemorySessionRepository::with_sessions(test_sessions()))
}

pub fn capture_logger() -> (Logger, Arc<InMemorySink>) {
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::builder()
        .minimum_level(LogLevel::Debug)
        .write_to(sink.clone())
        .build();
    (logger, sink)
}

/// Repository that counts calls and fails every one of them.
#[derive(Default)]
pub struct FailingRepository {
    calls: AtomicUsize,
}

impl FailingRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::new(ErrorCode::DatabaseError, "store unavailable"))
    }
}

#[async_trait]
impl BrainstormSessionRepository for FailingRepository {
    async fn get_by_id(&self, _id: i64) -> Result<Option<BrainstormSession>, DomainError> {
        self.fail()
    }

    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError> {
        self.fail()
    }

    async fn add(&self, _session: BrainstormSession) -> Result<BrainstormSession, DomainError> {
        self.fail()
    }

    async fn update(&self, _session: &BrainstormSession) -> Result<(), DomainError> {
        self.fail()
    }

    async fn add_idea(
        &self,
        _session_id: i64,
        _idea: Idea,
    ) -> Result<Option<BrainstormSession>, DomainError> {
        self.fail()
    }
}
