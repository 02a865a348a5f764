//! Handler for the one-time seed endpoint.

use axum::extract::State;
use axum::Json;
use mindcheck_db::seed::seed_initial_data;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Response for a seed attempt.
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disorders_added: Option<usize>,
}

/// POST /api/v1/seed-data
///
/// No-op with an informational message when data is already present.
pub async fn run(State(state): State<AppState>) -> AppResult<Json<SeedResponse>> {
    match seed_initial_data(&state.pool).await? {
        Some(summary) => Ok(Json(SeedResponse {
            message: "Database seeded successfully",
            disorders_added: Some(summary.disorders),
        })),
        None => Ok(Json(SeedResponse {
            message: "Data already seeded",
            disorders_added: None,
        })),
    }
}
