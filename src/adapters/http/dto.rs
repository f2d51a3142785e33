//! HTTP DTOs and request binding.

use axum::extract::rejection::FormRejection;
use axum::Form;
use serde::Serialize;

use crate::application::{ModelState, NewIdeaModel, NewSessionModel, ViewModel};
use crate::domain::foundation::ErrorCode;

/// Body of a rendered view.
#[derive(Debug, Clone, Serialize)]
pub struct ViewResponse {
    pub view: &'static str,
    pub model: ViewModel,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError.to_string(),
            message: message.into(),
        }
    }
}

/// Binds the new-session form, collecting validation errors.
///
/// A body the form extractor rejects (wrong content type, undecodable)
/// becomes an empty model with a `model` error.
pub fn bind_new_session(
    form: Result<Form<NewSessionModel>, FormRejection>,
) -> (NewSessionModel, ModelState) {
    let mut state = ModelState::new();
    let model = match form {
        Ok(Form(model)) => model,
        Err(rejection) => {
            state.add_model_error("model", rejection.body_text());
            NewSessionModel::default()
        }
    };
    model.validate(&mut state);
    (model, state)
}

/// Binds a JSON idea body, collecting validation errors.
///
/// An empty or unparseable body yields no model and a `model` error.
pub fn bind_new_idea(body: &[u8]) -> (Option<NewIdeaModel>, ModelState) {
    let mut state = ModelState::new();
    if body.iter().all(u8::is_ascii_whitespace) {
        state.add_model_error("model", "A non-empty request body is required.");
        return (None, state);
    }

    match serde_json::from_slice::<NewIdeaModel>(body) {
        Ok(model) => {
            model.validate(&mut state);
            (Some(model), state)
        }
        Err(e) => {
            state.add_model_error("model", e.to_string());
            (None, state)
        }
    }
}
