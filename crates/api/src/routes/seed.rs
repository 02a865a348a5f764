//! Route definition for the one-time seed endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::seed;
use crate::state::AppState;

/// Mounts `POST /seed-data`.
pub fn router() -> Router<AppState> {
    Router::new().route("/seed-data", post(seed::run))
}
