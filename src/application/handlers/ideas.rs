//! IdeasController - JSON API over a session's ideas.
//!
//! Two flavours of each action exist: the plain ones (`for_session`,
//! `create`) and the `*_action_result` ones, which differ only in how a
//! successful create is reported (`Ok` with the session versus `Created`
//! pointing back at the action).

use std::sync::Arc;

use crate::application::{ActionResult, ApiPayload, IdeaDto, ModelState, NewIdeaModel};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::session::{BrainstormSession, Idea};
use crate::logging::{Logger, Property};
use crate::ports::BrainstormSessionRepository;

/// Handler for the ideas API.
#[derive(Clone)]
pub struct IdeasController {
    repository: Arc<dyn BrainstormSessionRepository>,
    logger: Logger,
}

enum Added {
    Invalid(ModelState),
    MissingSession(i64),
    Stored(BrainstormSession),
}

impl IdeasController {
    pub fn new(repository: Arc<dyn BrainstormSessionRepository>, logger: Logger) -> Self {
        Self { repository, logger }
    }

    /// Copy of this controller whose events carry `RequestId`.
    pub fn for_request(&self, request_id: &str) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            logger: self.logger.for_context("RequestId", request_id),
        }
    }

    /// GET /api/ideas/forsession/:session_id
    pub async fn for_session(&self, session_id: i64) -> Result<ActionResult, DomainError> {
        match self.repository.get_by_id(session_id).await? {
            None => Ok(self.not_found(session_id)),
            Some(session) => {
                let ideas: Vec<IdeaDto> = session.ideas().iter().map(Into::into).collect();
                Ok(ActionResult::Ok(ApiPayload::Ideas(ideas)))
            }
        }
    }

    /// POST /api/ideas/create
    pub async fn create(
        &self,
        model: Option<&NewIdeaModel>,
        model_state: &ModelState,
    ) -> Result<ActionResult, DomainError> {
        Ok(match self.add_idea(model, model_state, "Create").await? {
            Added::Invalid(state) => ActionResult::BadRequest(state),
            Added::MissingSession(id) => self.not_found(id),
            Added::Stored(session) => ActionResult::Ok(ApiPayload::Session(session)),
        })
    }

    /// GET /api/ideas/forsessionactionresult/:session_id
    pub async fn for_session_action_result(
        &self,
        session_id: i64,
    ) -> Result<ActionResult, DomainError> {
        self.for_session(session_id).await
    }

    /// POST /api/ideas/createactionresult
    pub async fn create_action_result(
        &self,
        model: Option<&NewIdeaModel>,
        model_state: &ModelState,
    ) -> Result<ActionResult, DomainError> {
        Ok(
            match self
                .add_idea(model, model_state, "CreateActionResult")
                .await?
            {
                Added::Invalid(state) => ActionResult::BadRequest(state),
                Added::MissingSession(id) => self.not_found(id),
                Added::Stored(session) => ActionResult::CreatedAtAction {
                    action: "CreateActionResult",
                    id: session.id(),
                    value: ApiPayload::Session(session),
                },
            },
        )
    }

    async fn add_idea(
        &self,
        model: Option<&NewIdeaModel>,
        model_state: &ModelState,
        action: &'static str,
    ) -> Result<Added, DomainError> {
        let model = match model {
            Some(model) if model_state.is_valid() => model,
            _ => {
                let mut state = model_state.clone();
                if model.is_none() && state.is_valid() {
                    state.add_model_error("model", "A non-empty request body is required.");
                }
                self.logger.error_with(
                    "{Action} rejected idea: {ErrorCount} validation errors on {Fields}",
                    vec![
                        Property::new("Action", action),
                        Property::new("ErrorCount", state.error_count()),
                        Property::new("Fields", state.fields().join(", ")),
                    ],
                );
                return Ok(Added::Invalid(state));
            }
        };

        let session_id = model.session_id.unwrap_or_default();
        let idea = Idea::new(
            model.name.clone().unwrap_or_default(),
            model.description.clone().unwrap_or_default(),
            Timestamp::now(),
        );
        let Some(session) = self.repository.add_idea(session_id, idea).await? else {
            return Ok(Added::MissingSession(session_id));
        };
        let idea_id = session.ideas().last().map(Idea::id).unwrap_or_default();

        self.logger.information_with(
            "Added idea {IdeaId} to session {SessionId}",
            vec![
                Property::new("IdeaId", idea_id),
                Property::new("SessionId", session.id()),
            ],
        );
        Ok(Added::Stored(session))
    }

    fn not_found(&self, session_id: i64) -> ActionResult {
        self.logger.information_with(
            "Session {SessionId} not found",
            vec![Property::new("SessionId", session_id)],
        );
        ActionResult::NotFound(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        capture_logger, test_repository, FailingRepository,
    };
    use crate::logging::LogLevel;

    fn valid_model(session_id: i64) -> NewIdeaModel {
        NewIdeaModel {
            session_id: Some(session_id),
            name: Some("Test Name".to_string()),
            description: Some("Test Description".to_string()),
        }
    }

    #[tokio::test]
    async fn create_action_result_with_invalid_state_and_no_model_logs_error() {
        let (logger, sink) = capture_logger();
        let repository = Arc::new(FailingRepository::default());
        let controller = IdeasController::new(repository.clone(), logger);
        let mut state = ModelState::new();
        state.add_model_error("error", "some error");

        let result = controller.create_action_result(None, &state).await.unwrap();

        assert_eq!(result, ActionResult::BadRequest(state));
        assert!(sink.any(LogLevel::Error));
        assert_eq!(repository.calls(), 0);
    }

    #[tokio::test]
    async fn create_action_result_without_model_is_rejected_even_with_clean_state() {
        let (logger, sink) = capture_logger();
        let controller = IdeasController::new(test_repository(), logger);

        let result = controller
            .create_action_result(None, &ModelState::new())
            .await
            .unwrap();

        match result {
            ActionResult::BadRequest(state) => assert_eq!(state.fields(), vec!["model"]),
            other => panic!("expected bad request, got {:?}", other),
        }
        assert!(sink.any(LogLevel::Error));
    }

    #[tokio::test]
    async fn create_action_result_for_unknown_session_returns_not_found() {
        let (logger, sink) = capture_logger();
        let controller = IdeasController::new(test_repository(), logger);

        let result = controller
            .create_action_result(Some(&valid_model(99)), &ModelState::new())
            .await
            .unwrap();

        assert_eq!(result, ActionResult::NotFound(99));
        assert!(!sink.any(LogLevel::Error));
    }

    #[tokio::test]
    async fn create_action_result_adds_idea_and_returns_created() {
        let (logger, _sink) = capture_logger();
        let repository = test_repository();
        let controller = IdeasController::new(repository.clone(), logger);

        let result = controller
            .create_action_result(Some(&valid_model(1)), &ModelState::new())
            .await
            .unwrap();

        match result {
            ActionResult::CreatedAtAction {
                action,
                id,
                value: ApiPayload::Session(session),
            } => {
                assert_eq!(action, "CreateActionResult");
                assert_eq!(id, 1);
                assert_eq!(session.idea_count(), 1);
                assert_eq!(session.ideas()[0].name(), "Test Name");
            }
            other => panic!("expected created result, got {:?}", other),
        }
        let stored = repository.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.idea_count(), 1);
    }

    #[tokio::test]
    async fn create_with_invalid_state_logs_error() {
        let (logger, sink) = capture_logger();
        let controller = IdeasController::new(test_repository(), logger);
        let mut state = ModelState::new();
        state.add_model_error("Name", "Required");

        let result = controller
            .create(Some(&NewIdeaModel::default()), &state)
            .await
            .unwrap();

        assert_eq!(result, ActionResult::BadRequest(state));
        assert_eq!(sink.count(LogLevel::Error), 1);
    }

    #[tokio::test]
    async fn create_returns_updated_session() {
        let (logger, _sink) = capture_logger();
        let controller = IdeasController::new(test_repository(), logger);

        let result = controller
            .create(Some(&valid_model(2)), &ModelState::new())
            .await
            .unwrap();

        match result {
            ActionResult::Ok(ApiPayload::Session(session)) => {
                assert_eq!(session.id(), 2);
                assert_eq!(session.idea_count(), 1);
            }
            other => panic!("expected ok session, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn for_session_returns_ideas_as_dtos() {
        let (logger, _sink) = capture_logger();
        let repository = test_repository();
        let controller = IdeasController::new(repository.clone(), logger);
        controller
            .create(Some(&valid_model(1)), &ModelState::new())
            .await
            .unwrap();

        let result = controller.for_session(1).await.unwrap();

        match result {
            ActionResult::Ok(ApiPayload::Ideas(ideas)) => {
                assert_eq!(ideas.len(), 1);
                assert_eq!(ideas[0].id, 1);
                assert_eq!(ideas[0].description, "Test Description");
            }
            other => panic!("expected ideas, got {:?}", other),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_creates_on_one_session_keep_every_idea() {
        let (logger, sink) = capture_logger();
        let repository = test_repository();
        let controller = IdeasController::new(repository.clone(), logger);

        let tasks: Vec<_> = (0..200)
            .map(|_| {
                let controller = controller.clone();
                tokio::spawn(async move {
                    controller
                        .create(Some(&valid_model(1)), &ModelState::new())
                        .await
                        .unwrap()
                })
            })
            .collect();
        for task in tasks {
            assert!(matches!(
                task.await.unwrap(),
                ActionResult::Ok(ApiPayload::Session(_))
            ));
        }

        let stored = repository.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.idea_count(), 200);
        assert_eq!(sink.count(LogLevel::Information), 200);
    }

    #[tokio::test]
    async fn for_session_action_result_returns_not_found_for_unknown_session() {
        let (logger, sink) = capture_logger();
        let controller = IdeasController::new(test_repository(), logger);

        let result = controller.for_session_action_result(42).await.unwrap();

        assert_eq!(result, ActionResult::NotFound(42));
        assert!(sink.any(LogLevel::Information));
        assert!(!sink.any(LogLevel::Error));
    }
}
