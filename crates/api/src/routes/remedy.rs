//! Route definitions for the `/remedies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::remedy;
use crate::state::AppState;

/// Routes mounted at `/remedies`.
///
/// ```text
/// GET /       -> list
/// GET /{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(remedy::list))
        .route("/{id}", get(remedy::get_by_id))
}
