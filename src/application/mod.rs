//! Application layer - request handlers and the models they exchange.
//!
//! Handlers orchestrate repository calls and logging; they never touch
//! HTTP types. The adapter layer turns an `ActionResult` into a response.

mod action_result;
pub mod handlers;
mod model_state;
mod view_models;

pub use action_result::{ActionResult, ApiPayload, ViewModel};
pub use handlers::{HomeController, IdeasController, SessionController, SESSION_NOT_FOUND};
pub use model_state::ModelState;
pub use view_models::{IdeaDto, NewIdeaModel, NewSessionModel, StormSessionViewModel};
