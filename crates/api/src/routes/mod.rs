pub mod assessment;
pub mod disorder;
pub mod health;
pub mod question;
pub mod remedy;
pub mod seed;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /disorders                       list, create
/// /disorders/{id}                  get, update, delete
/// /disorders/search/{name}         search by name fragment
///
/// /assessments                     submit (POST)
/// /assessments/{session_id}        get by session token
///
/// /questions                       active questions in display order
///
/// /remedies                        list
/// /remedies/{id}                   get
///
/// /seed-data                       one-time seed (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/disorders", disorder::router())
        .nest("/assessments", assessment::router())
        .nest("/questions", question::router())
        .nest("/remedies", remedy::router())
        .merge(seed::router())
}
