//! Route definitions for the `/assessments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assessment;
use crate::state::AppState;

/// Routes mounted at `/assessments`.
///
/// ```text
/// POST /               -> submit
/// GET  /{session_id}   -> get_by_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(assessment::submit))
        .route("/{session_id}", get(assessment::get_by_session))
}
