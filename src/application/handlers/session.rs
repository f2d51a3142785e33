//! SessionController - single session detail.

use std::sync::Arc;

use crate::application::{ActionResult, StormSessionViewModel, ViewModel};
use crate::domain::foundation::DomainError;
use crate::logging::Logger;
use crate::ports::BrainstormSessionRepository;

/// Plain response for an unknown session id.
pub const SESSION_NOT_FOUND: &str = "Session not found.";

/// Handler for the session detail page.
#[derive(Clone)]
pub struct SessionController {
    repository: Arc<dyn BrainstormSessionRepository>,
    logger: Logger,
}

impl SessionController {
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

    /// GET /session/:id - shows one session.
    ///
    /// Emits exactly two Debug events on every path that reaches a terminal
    /// result: the entry event, then one describing the outcome.
    pub async fn index(&self, id: Option<i64>) -> Result<ActionResult, DomainError> {
        let logger = self.logger.for_context("Id", id);
        logger.debug("Executing Index action");

        let Some(id) = id else {
            logger.debug("No session id supplied, redirecting to Home.Index");
            return Ok(ActionResult::redirect_to_action("Index", Some("Home")));
        };

        match self.repository.get_by_id(id).await? {
            None => {
                logger.debug("Session {Id} not found");
                Ok(ActionResult::Content(SESSION_NOT_FOUND.to_string()))
            }
            Some(session) => {
                logger.debug("Rendering session {Id}");
                let model = StormSessionViewModel::from(&session);
                Ok(ActionResult::view("Index", ViewModel::Session(model)))
            }
        }
    }
}
