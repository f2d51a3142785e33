//! Mapping from handler outcomes to HTTP responses.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{ErrorResponse, ViewResponse};
use crate::application::ActionResult;
use crate::domain::foundation::DomainError;

/// Path an action redirect points at.
pub fn location_for(action: &str, controller: Option<&str>) -> &'static str {
    match (action, controller) {
        ("Index", Some("Session")) => "/session",
        _ => "/",
    }
}

/// Location of a resource created through `action`.
pub fn created_location(action: &str, id: i64) -> String {
    format!("/api/ideas/{}?id={}", action.to_ascii_lowercase(), id)
}

impl IntoResponse for ActionResult {
    fn into_response(self) -> Response {
        match self {
            ActionResult::View { name, model } => {
                (StatusCode::OK, Json(ViewResponse { view: name, model })).into_response()
            }
            ActionResult::RedirectToAction { action, controller } => (
                StatusCode::FOUND,
                [(header::LOCATION, location_for(action, controller))],
            )
                .into_response(),
            ActionResult::Content(text) => (StatusCode::OK, text).into_response(),
            ActionResult::BadRequest(state) => (StatusCode::BAD_REQUEST, Json(state)).into_response(),
            ActionResult::NotFound(id) => (StatusCode::NOT_FOUND, Json(id)).into_response(),
            ActionResult::Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
            ActionResult::CreatedAtAction { action, id, value } => (
                StatusCode::CREATED,
                [(header::LOCATION, created_location(action, id))],
                Json(value),
            )
                .into_response(),
        }
    }
}

/// Writes a handler outcome, turning unhandled failures into a 500.
pub fn render(result: Result<ActionResult, DomainError>) -> Response {
    match result {
        Ok(action) => action.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Unhandled failure while serving request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(e.message)),
            )
                .into_response()
        }
    }
}
