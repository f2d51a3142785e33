//! HTTP adapter - axum routes for the pages and the ideas API.
//!
//! Handlers bind the request, scope the controller logger to the request id
//! and render the returned `ActionResult`.

mod dto;
mod handlers;
mod request_id;
mod responses;
mod routes;

pub use dto::{bind_new_idea, bind_new_session, ErrorResponse, ViewResponse};
pub use handlers::AppControllers;
pub use request_id::{RequestIdentity, REQUEST_ID_HEADER};
pub use responses::{created_location, location_for, render};
pub use routes::{app_router, build_app};
