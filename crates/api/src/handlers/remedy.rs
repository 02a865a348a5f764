//! Handlers for the `/remedies` resource.

use axum::extract::{Path, State};
use axum::Json;
use mindcheck_core::error::CoreError;
use mindcheck_core::types::DbId;
use mindcheck_db::models::remedy::Remedy;
use mindcheck_db::repositories::RemedyRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/remedies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Remedy>>> {
    let remedies = RemedyRepo::list(&state.pool).await?;
    Ok(Json(remedies))
}

/// GET /api/v1/remedies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Remedy>> {
    let remedy = RemedyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Remedy",
            id,
        }))?;
    Ok(Json(remedy))
}
