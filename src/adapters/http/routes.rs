//! HTTP routes and the middleware stack.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers::{
    home_create, home_index, ideas_create, ideas_create_action_result, ideas_for_session,
    ideas_for_session_action_result, session_index, AppControllers,
};

/// Idea API routes, mounted under `/api/ideas`.
fn ideas_routes() -> Router<AppControllers> {
    Router::new()
        .route("/forsession/:session_id", get(ideas_for_session))
        .route("/create", post(ideas_create))
        .route(
            "/forsessionactionresult/:session_id",
            get(ideas_for_session_action_result),
        )
        .route("/createactionresult", post(ideas_create_action_result))
}

/// All application routes without middleware.
pub fn app_router(controllers: AppControllers) -> Router {
    Router::new()
        .route("/", get(home_index).post(home_create))
        .route("/session", get(session_index))
        .route("/session/:id", get(session_index))
        .nest("/api/ideas", ideas_routes())
        .with_state(controllers)
}

/// The application router wrapped in request id, tracing and timeout layers.
pub fn build_app(controllers: AppControllers, request_timeout: Duration) -> Router {
    app_router(controllers)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
