//! Repository for the `assessments` table.

use mindcheck_core::types::DbId;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::models::assessment::{Assessment, CreateAssessment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, session_id, answers, result, severity_score, suggested_disorder_ids, created_at";

/// Provides persistence for scored assessments.
///
/// Assessments are immutable once created: there is no update method, and
/// `session_id` never changes.
pub struct AssessmentRepo;

impl AssessmentRepo {
    /// Insert a new assessment, returning the created row.
    ///
    /// The answer sequence is stored as a JSON array, order preserved.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateAssessment,
    ) -> Result<Assessment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assessments
                (session_id, answers, result, severity_score, suggested_disorder_ids)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(&input.session_id)
            .bind(Json(&input.answers))
            .bind(&input.result)
            .bind(input.severity_score)
            .bind(input.suggested_disorder_ids.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }

    /// Find an assessment by its internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments WHERE id = $1");
        sqlx::query_as::<_, Assessment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an assessment by its anonymous session token.
    pub async fn find_by_session(
        pool: &SqlitePool,
        session_id: &str,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments WHERE session_id = $1");
        sqlx::query_as::<_, Assessment>(&query)
            .bind(session_id)
            .fetch_optional(pool)
            .await
    }

    /// List all assessments, oldest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments ORDER BY id");
        sqlx::query_as::<_, Assessment>(&query).fetch_all(pool).await
    }

    /// Delete an assessment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assessments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
