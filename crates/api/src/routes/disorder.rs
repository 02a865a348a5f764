//! Route definitions for the `/disorders` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::disorder;
use crate::state::AppState;

/// Routes mounted at `/disorders`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PATCH  /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /search/{name}  -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(disorder::list).post(disorder::create))
        .route(
            "/{id}",
            get(disorder::get_by_id)
                .patch(disorder::update)
                .delete(disorder::delete),
        )
        .route("/search/{name}", get(disorder::search))
}
