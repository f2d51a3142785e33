//! Controller logging behavior observed through both capture paths.
//!
//! Every fixture installs a fresh in-memory sink and a fresh `tracing`
//! capture, so counts never carry over between tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use proptest::prelude::*;
use tracing::subscriber::DefaultGuard;

use brainstorm_sessions::adapters::InMemorySessionRepository;
use brainstorm_sessions::application::{
    ActionResult, HomeController, IdeasController, ModelState, NewSessionModel,
    SessionController, ViewModel,
};
use brainstorm_sessions::domain::foundation::{DomainError, Timestamp};
use brainstorm_sessions::domain::session::{BrainstormSession, Idea};
use brainstorm_sessions::logging::{
    InMemorySink, LogLevel, Logger, TracingCapture, TracingSink,
};
use brainstorm_sessions::ports::BrainstormSessionRepository;

// ════════════════════════════════════════════════════════════════════════════
// Fixture
// ════════════════════════════════════════════════════════════════════════════

struct LoggingFixture {
    logger: Logger,
    memory: Arc<InMemorySink>,
    capture: TracingCapture,
    _guard: DefaultGuard,
}

impl LoggingFixture {
    fn new() -> Self {
        let (capture, guard) = TracingCapture::install();
        let memory = Arc::new(InMemorySink::new());
        let logger = Logger::builder()
            .minimum_level(LogLevel::Debug)
            .write_to(memory.clone())
            .write_to(Arc::new(TracingSink::new()))
            .build();
        Self {
            logger,
            memory,
            capture,
            _guard: guard,
        }
    }

    /// Count at `level`, asserting both pipelines agree.
    fn count(&self, level: LogLevel) -> usize {
        let memory = self.memory.count(level);
        assert_eq!(
            memory,
            self.capture.count(level),
            "pipelines disagree at {level}"
        );
        memory
    }
}

fn test_sessions() -> Vec<BrainstormSession> {
    vec![
        BrainstormSession::new("Test One", Timestamp::from_ymd(2016, 7, 2).unwrap()).with_id(1),
        BrainstormSession::new("Test Two", Timestamp::from_ymd(2016, 7, 1).unwrap()).with_id(2),
    ]
}

/// Repository that records how often it is reached.
struct CountingRepository {
    inner: InMemorySessionRepository,
    calls: AtomicUsize,
}

impl CountingRepository {
    fn new(sessions: Vec<BrainstormSession>) -> Self {
        Self {
            inner: InMemorySessionRepository::with_sessions(sessions),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BrainstormSessionRepository for CountingRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<BrainstormSession>, DomainError> {
        self.hit();
        self.inner.get_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError> {
        self.hit();
        self.inner.list().await
    }

    async fn add(&self, session: BrainstormSession) -> Result<BrainstormSession, DomainError> {
        self.hit();
        self.inner.add(session).await
    }

    async fn update(&self, session: &BrainstormSession) -> Result<(), DomainError> {
        self.hit();
        self.inner.update(session).await
    }

    async fn add_idea(
        &self,
        session_id: i64,
        idea: Idea,
    ) -> Result<Option<BrainstormSession>, DomainError> {
        self.hit();
        self.inner.add_idea(session_id, idea).await
    }
}

fn repository() -> Arc<CountingRepository> {
    Arc::new(CountingRepository::new(test_sessions()))
}

// ════════════════════════════════════════════════════════════════════════════
// Home
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn home_index_logs_information_and_lists_both_sessions() {
    let fixture = LoggingFixture::new();
    let controller = HomeController::new(repository(), fixture.logger.clone());

    let result = controller.index().await.unwrap();

    assert!(fixture.count(LogLevel::Information) >= 1);
    let Some(ViewModel::SessionList(sessions)) = result.view_model() else {
        panic!("expected session list, got {result:?}");
    };
    assert_eq!(sessions.len(), 2);
    assert_eq!((sessions[0].id, sessions[0].name.as_str()), (1, "Test One"));
    assert_eq!((sessions[1].id, sessions[1].name.as_str()), (2, "Test Two"));
    assert_eq!(
        sessions[0].date_created,
        Timestamp::from_ymd(2016, 7, 2).unwrap()
    );
}

#[tokio::test]
async fn home_index_post_with_invalid_model_logs_warning() {
    let fixture = LoggingFixture::new();
    let repo = repository();
    let controller = HomeController::new(repo.clone(), fixture.logger.clone());
    let mut state = ModelState::new();
    state.add_model_error("SessionName", "Required");

    let result = controller
        .index_post(&NewSessionModel::default(), &state)
        .await
        .unwrap();

    assert!(fixture.count(LogLevel::Warning) >= 1);
    assert!(matches!(result, ActionResult::BadRequest(_)));
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn home_index_post_with_valid_model_logs_no_warning() {
    let fixture = LoggingFixture::new();
    let repo = repository();
    let controller = HomeController::new(repo.clone(), fixture.logger.clone());

    let result = controller
        .index_post(&NewSessionModel::named("Fresh"), &ModelState::new())
        .await
        .unwrap();

    assert_eq!(fixture.count(LogLevel::Warning), 0);
    assert_eq!(
        result,
        ActionResult::redirect_to_action("Index", None)
    );
    assert_eq!(repo.inner.count().await, 3);
}

// ════════════════════════════════════════════════════════════════════════════
// Ideas
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn ideas_create_with_invalid_state_and_no_model_logs_error() {
    let fixture = LoggingFixture::new();
    let controller = IdeasController::new(repository(), fixture.logger.clone());
    let mut state = ModelState::new();
    state.add_model_error("error", "some error");

    let result = controller.create_action_result(None, &state).await.unwrap();

    assert!(fixture.count(LogLevel::Error) >= 1);
    assert!(matches!(result, ActionResult::BadRequest(_)));
}

// ════════════════════════════════════════════════════════════════════════════
// Session
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn session_index_with_known_id_logs_two_debug_events() {
    let fixture = LoggingFixture::new();
    let controller = SessionController::new(repository(), fixture.logger.clone());

    let result = controller.index(Some(1)).await.unwrap();

    assert_eq!(fixture.count(LogLevel::Debug), 2);
    let Some(ViewModel::Session(model)) = result.view_model() else {
        panic!("expected session view, got {result:?}");
    };
    assert_eq!(model.id, 1);
    assert_eq!(model.name, "Test One");
}

#[tokio::test]
async fn session_index_with_unknown_id_logs_two_debug_events() {
    let fixture = LoggingFixture::new();
    let controller = SessionController::new(repository(), fixture.logger.clone());

    let result = controller.index(Some(99)).await.unwrap();

    assert_eq!(fixture.count(LogLevel::Debug), 2);
    assert_eq!(result, ActionResult::Content("Session not found.".to_string()));
}

#[tokio::test]
async fn session_index_without_id_logs_two_debug_events_and_redirects() {
    let fixture = LoggingFixture::new();
    let repo = repository();
    let controller = SessionController::new(repo.clone(), fixture.logger.clone());

    let result = controller.index(None).await.unwrap();

    assert_eq!(fixture.count(LogLevel::Debug), 2);
    assert_eq!(
        result,
        ActionResult::redirect_to_action("Index", Some("Home"))
    );
    assert_eq!(repo.calls(), 0);
}

// ════════════════════════════════════════════════════════════════════════════
// Fixture isolation
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn fresh_fixture_does_not_see_previous_events() {
    let first = LoggingFixture::new();
    SessionController::new(repository(), first.logger.clone())
        .index(Some(1))
        .await
        .unwrap();
    assert_eq!(first.count(LogLevel::Debug), 2);
    drop(first);

    let second = LoggingFixture::new();
    SessionController::new(repository(), second.logger.clone())
        .index(Some(2))
        .await
        .unwrap();
    assert_eq!(second.count(LogLevel::Debug), 2);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn home_index_always_logs_information(count in 0usize..20) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let sessions: Vec<BrainstormSession> = (1..=count as i64)
            .map(|id| BrainstormSession::new(format!("Session {id}"), Timestamp::now()).with_id(id))
            .collect();

        let fixture = LoggingFixture::new();
        let controller = HomeController::new(
            Arc::new(CountingRepository::new(sessions)),
            fixture.logger.clone(),
        );
        let result = runtime.block_on(controller.index()).unwrap();

        prop_assert!(fixture.count(LogLevel::Information) >= 1);
        let Some(ViewModel::SessionList(listed)) = result.view_model() else {
            return Err(TestCaseError::fail("expected session list"));
        };
        prop_assert_eq!(listed.len(), count);
    }
}
