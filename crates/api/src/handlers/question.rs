//! Handlers for the `/questions` resource.

use axum::extract::State;
use axum::Json;
use mindcheck_db::models::question::Question;
use mindcheck_db::repositories::QuestionRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/questions
///
/// Active questions only, ordered by `order_index` ascending.
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Question>>> {
    let questions = QuestionRepo::list_active(&state.pool).await?;
    Ok(Json(questions))
}
