//! HTTP handlers for the page and idea API endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::FormRejection, Path, State},
    response::Response,
    Form,
};

use crate::application::{HomeController, IdeasController, NewSessionModel, SessionController};
use crate::logging::Logger;
use crate::ports::BrainstormSessionRepository;

use super::dto::{bind_new_idea, bind_new_session};
use super::request_id::RequestIdentity;
use super::responses::render;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AppControllers {
    home: HomeController,
    ideas: IdeasController,
    session: SessionController,
}

impl AppControllers {
    pub fn new(repository: Arc<dyn BrainstormSessionRepository>, logger: Logger) -> Self {
        Self {
            home: HomeController::new(repository.clone(), logger.clone()),
            ideas: IdeasController::new(repository.clone(), logger.clone()),
            session: SessionController::new(repository, logger),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Home
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Lists all sessions
pub async fn home_index(
    State(controllers): State<AppControllers>,
    RequestIdentity(request_id): RequestIdentity,
) -> Response {
    render(controllers.home.for_request(&request_id).index().await)
}

/// POST / - Creates a session from a `SessionName` form field
pub async fn home_create(
    State(controllers): State<AppControllers>,
    RequestIdentity(request_id): RequestIdentity,
    form: Result<Form<NewSessionModel>, FormRejection>,
) -> Response {
    let (model, model_state) = bind_new_session(form);

    render(
        controllers
            .home
            .for_request(&request_id)
            .index_post(&model, &model_state)
            .await,
    )
}

// ════════════════════════════════════════════════════════════════════════════
// Session
// ════════════════════════════════════════════════════════════════════════════

/// GET /session and GET /session/:id - Shows one session
///
/// A missing or non-numeric id is treated as absent.
pub async fn session_index(
    State(controllers): State<AppControllers>,
    RequestIdentity(request_id): RequestIdentity,
    id: Option<Path<i64>>,
) -> Response {
    let id = id.map(|Path(id)| id);
    render(controllers.session.for_request(&request_id).index(id).await)
}

// ════════════════════════════════════════════════════════════════════════════
// Ideas API
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/ideas/forsession/:session_id
pub async fn ideas_for_session(
    State(controllers): State<AppControllers>,
    RequestIdentity(request_id): RequestIdentity,
    Path(session_id): Path<i64>,
) -> Response {
    render(
        controllers
            .ideas
            .for_request(&request_id)
            .for_session(session_id)
            .await,
    )
}

/// POST /api/ideas/create
pub async fn ideas_create(
    State(controllers): State<AppControllers>,
    RequestIdentity(request_id): RequestIdentity,
    body: Bytes,
) -> Response {
    let (model, model_state) = bind_new_idea(&body);
    render(
        controllers
            .ideas
            .for_request(&request_id)
            .create(model.as_ref(), &model_state)
            .await,
    )
}

/// GET /api/ideas/forsessionactionresult/:session_id
pub async fn ideas_for_session_action_result(
    State(controllers): State<AppControllers>,
    RequestIdentity(request_id): RequestIdentity,
    Path(session_id): Path<i64>,
) -> Response {
    render(
        controllers
            .ideas
            .for_request(&request_id)
            .for_session_action_result(session_id)
            .await,
    )
}

/// POST /api/ideas/createactionresult
pub async fn ideas_create_action_result(
    State(controllers): State<AppControllers>,
    RequestIdentity(request_id): RequestIdentity,
    body: Bytes,
) -> Response {
    let (model, model_state) = bind_new_idea(&body);
    render(
        controllers
            .ideas
            .for_request(&request_id)
            .create_action_result(model.as_ref(), &model_state)
            .await,
    )
}
