//! Route definitions for the `/questions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::question;
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// GET /   -> list_active
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(question::list_active))
}
