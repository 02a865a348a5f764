//! Assessment entity model and DTOs.

use mindcheck_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `assessments` table.
///
/// `session_id` is an opaque anonymous session token, unique and immutable
/// once created. `answers` preserves the submitted sequence in order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assessment {
    pub id: DbId,
    pub session_id: String,
    pub answers: Json<Vec<String>>,
    pub result: String,
    pub severity_score: i64,
    pub suggested_disorder_ids: Option<Json<Vec<DbId>>>,
    pub created_at: Timestamp,
}

/// DTO for persisting a scored assessment.
///
/// Built by the assessment handler after classification, never
/// deserialized from a request body.
#[derive(Debug, Clone)]
pub struct CreateAssessment {
    pub session_id: String,
    pub answers: Vec<String>,
    pub result: String,
    pub severity_score: i64,
    pub suggested_disorder_ids: Option<Vec<DbId>>,
}
