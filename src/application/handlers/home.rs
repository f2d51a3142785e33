//! HomeController - session listing and creation.

use std::sync::Arc;

use crate::application::{
    ActionResult, ModelState, NewSessionModel, StormSessionViewModel, ViewModel,
};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::session::BrainstormSession;
use crate::logging::{Logger, Property};
use crate::ports::BrainstormSessionRepository;

/// Handler for the session listing page.
#[derive(Clone)]
pub struct HomeController {
    repository: Arc<dyn BrainstormSessionRepository>,
    logger: Logger,
}

impl HomeController {
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

    /// GET / - lists every session.
    pub async fn index(&self) -> Result<ActionResult, DomainError> {
        self.logger.information("Loading brainstorm sessions");

        let sessions = self.repository.list().await?;
        let model: Vec<StormSessionViewModel> = sessions.iter().map(Into::into).collect();

        self.logger.information_with(
            "Listing {Count} brainstorm sessions",
            vec![Property::new("Count", model.len())],
        );
        Ok(ActionResult::view("Index", ViewModel::SessionList(model)))
    }

    /// POST / - creates a session from the submitted form.
    pub async fn index_post(
        &self,
        model: &NewSessionModel,
        model_state: &ModelState,
    ) -> Result<ActionResult, DomainError> {
        if !model_state.is_valid() {
            self.logger.warning_with(
                "Rejected new session: {ErrorCount} validation errors on {Fields}",
                vec![
                    Property::new("ErrorCount", model_state.error_count()),
                    Property::new("Fields", model_state.fields().join(", ")),
                ],
            );
            return Ok(ActionResult::BadRequest(model_state.clone()));
        }

        let name = model.session_name.clone().unwrap_or_default();
        let session = self
            .repository
            .add(BrainstormSession::new(name, Timestamp::now()))
            .await?;

        self.logger.information_with(
            "Created session {SessionId} named {SessionName}",
            vec![
                Property::new("SessionId", session.id()),
                Property::new("SessionName", session.name()),
            ],
        );
        Ok(ActionResult::redirect_to_action("Index", None))
    }
}
