//! Handlers for the `/assessments` resource.

use axum::extract::{Path, State};
use axum::Json;
use mindcheck_core::error::CoreError;
use mindcheck_core::scoring::{self, SeverityTier};
use mindcheck_db::models::assessment::{Assessment, CreateAssessment};
use mindcheck_db::repositories::AssessmentRepo;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for submitting an assessment.
#[derive(Debug, Deserialize)]
pub struct SubmitAssessment {
    pub answers: Vec<String>,
}

/// Response for a scored assessment.
#[derive(Debug, Serialize)]
pub struct AssessmentOutcome {
    pub session_id: String,
    pub result: String,
    pub severity: SeverityTier,
    pub severity_score: i64,
    pub remedies: Vec<String>,
}

/// POST /api/v1/assessments
///
/// Validates the answer count before any write, classifies the answers,
/// and persists one new assessment row under a fresh session token.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<SubmitAssessment>,
) -> AppResult<Json<AssessmentOutcome>> {
    if input.answers.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Answers are required".to_string(),
        )));
    }
    if input.answers.len() < scoring::MIN_ANSWERS {
        return Err(AppError::Core(CoreError::Validation(
            "Please answer all questions".to_string(),
        )));
    }

    let outcome = scoring::classify(&input.answers);
    let session_id = Uuid::new_v4().to_string();

    tracing::info!(
        session_id = %session_id,
        score = outcome.score,
        tier = outcome.tier.as_str(),
        "Assessment scored"
    );

    let created = AssessmentRepo::create(
        &state.pool,
        &CreateAssessment {
            session_id,
            answers: input.answers,
            result: outcome.narrative.to_string(),
            severity_score: outcome.score,
            suggested_disorder_ids: None,
        },
    )
    .await?;

    Ok(Json(AssessmentOutcome {
        session_id: created.session_id,
        result: created.result,
        severity: outcome.tier,
        severity_score: created.severity_score,
        remedies: outcome.remedies.iter().map(|r| r.to_string()).collect(),
    }))
}

/// GET /api/v1/assessments/{session_id}
pub async fn get_by_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> AppResult<Json<Assessment>> {
    let assessment = AssessmentRepo::find_by_session(&state.pool, &session_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundByKey {
            entity: "Assessment",
            key: session_id,
        }))?;
    Ok(Json(assessment))
}
