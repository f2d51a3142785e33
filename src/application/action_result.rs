//! Terminal outcomes of a handler invocation.
//!
//! Handlers return an `ActionResult`; the HTTP adapter decides how each
//! variant is written to the wire.

use serde::Serialize;

use super::{IdeaDto, ModelState, StormSessionViewModel};
use crate::domain::session::BrainstormSession;

/// Model passed to a rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ViewModel {
    SessionList(Vec<StormSessionViewModel>),
    Session(StormSessionViewModel),
}

/// Body of a successful API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ApiPayload {
    Ideas(Vec<IdeaDto>),
    Session(BrainstormSession),
}

/// What a handler asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Render the named view with a model.
    View { name: &'static str, model: ViewModel },
    /// Redirect to another action, optionally on another controller.
    RedirectToAction {
        action: &'static str,
        controller: Option<&'static str>,
    },
    /// Plain text response.
    Content(String),
    /// Validation failed; carries the field errors.
    BadRequest(ModelState),
    /// The requested resource id does not exist.
    NotFound(i64),
    /// Successful API response.
    Ok(ApiPayload),
    /// Resource created; locatable through `action` with `id`.
    CreatedAtAction {
        action: &'static str,
        id: i64,
        value: ApiPayload,
    },
}

impl ActionResult {
    pub fn view(name: &'static str, model: ViewModel) -> Self {
        ActionResult::View { name, model }
    }

    pub fn redirect_to_action(action: &'static str, controller: Option<&'static str>) -> Self {
        ActionResult::RedirectToAction { action, controller }
    }

    /// The view model, if this is a rendered view.
    pub fn view_model(&self) -> Option<&ViewModel> {
        match self {
            ActionResult::View { model, .. } => Some(model),
            _ => None,
        }
    }
}
