//! Handlers for the `/disorders` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mindcheck_core::error::CoreError;
use mindcheck_core::types::DbId;
use mindcheck_db::models::disorder::{
    CreateDisorder, Disorder, DisorderWithRemedies, UpdateDisorder,
};
use mindcheck_db::repositories::{DisorderRepo, RemedyRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::Message;
use crate::state::AppState;

/// Response for disorder creation and update.
#[derive(Debug, Serialize)]
pub struct DisorderMessage {
    pub message: &'static str,
    pub disorder: Disorder,
}

/// POST /api/v1/disorders
///
/// Creating a disorder whose name already exists is an idempotent no-op:
/// the existing record is returned with a 200 instead of an error. The
/// UNIQUE constraint on `disorders.name` backstops the exists-check
/// against concurrent duplicate creations.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDisorder>,
) -> AppResult<(StatusCode, Json<DisorderMessage>)> {
    if let Some(existing) = DisorderRepo::find_by_name(&state.pool, &input.name).await? {
        return Ok((
            StatusCode::OK,
            Json(DisorderMessage {
                message: "Disorder already exists",
                disorder: existing,
            }),
        ));
    }

    let disorder = DisorderRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DisorderMessage {
            message: "Disorder created successfully",
            disorder,
        }),
    ))
}

/// GET /api/v1/disorders
///
/// Every disorder is returned together with the titles of its remedies.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<DisorderWithRemedies>>> {
    let disorders = DisorderRepo::list(&state.pool).await?;

    let mut result = Vec::with_capacity(disorders.len());
    for disorder in disorders {
        let titles = RemedyRepo::titles_for_disorder(&state.pool, disorder.id).await?;
        result.push(DisorderWithRemedies::from_parts(disorder, titles));
    }
    Ok(Json(result))
}

/// GET /api/v1/disorders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DisorderWithRemedies>> {
    let disorder = DisorderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Disorder",
            id,
        }))?;
    let titles = RemedyRepo::titles_for_disorder(&state.pool, id).await?;
    Ok(Json(DisorderWithRemedies::from_parts(disorder, titles)))
}

/// PATCH /api/v1/disorders/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDisorder>,
) -> AppResult<Json<DisorderMessage>> {
    let disorder = DisorderRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Disorder",
            id,
        }))?;
    Ok(Json(DisorderMessage {
        message: "Disorder updated successfully",
        disorder,
    }))
}

/// DELETE /api/v1/disorders/{id}
///
/// Removing a disorder removes its remedies in the same atomic statement.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Message>> {
    let deleted = DisorderRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(Message::new("Disorder deleted successfully")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Disorder",
            id,
        }))
    }
}

/// GET /api/v1/disorders/search/{name}
///
/// Case-insensitive substring match; an empty result is a 404 rather than
/// an empty list.
pub async fn search(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<DisorderWithRemedies>>> {
    let disorders = DisorderRepo::search_by_name(&state.pool, &name).await?;
    if disorders.is_empty() {
        return Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "Disorder",
            key: name,
        }));
    }

    let mut result = Vec::with_capacity(disorders.len());
    for disorder in disorders {
        let titles = RemedyRepo::titles_for_disorder(&state.pool, disorder.id).await?;
        result.push(DisorderWithRemedies::from_parts(disorder, titles));
    }
    Ok(Json(result))
}
