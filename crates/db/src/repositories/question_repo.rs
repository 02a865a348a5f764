//! Repository for the `questions` table.

use mindcheck_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::question::{CreateQuestion, Question, UpdateQuestion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, text, category, weight, order_index, is_active, created_at";

/// Provides CRUD operations for assessment questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    ///
    /// If `weight` is `None`, defaults to 1.
    /// If `order_index` is `None`, defaults to 0.
    /// If `is_active` is `None`, defaults to 1 (active).
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateQuestion,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (text, category, weight, order_index, is_active)
             VALUES ($1, $2, COALESCE($3, 1), COALESCE($4, 0), COALESCE($5, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.text)
            .bind(&input.category)
            .bind(input.weight)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a question by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all questions, oldest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// List active questions in display order.
    pub async fn list_active(pool: &SqlitePool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE is_active = 1
             ORDER BY order_index"
        );
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// Update a question. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions SET
                text = COALESCE($2, text),
                category = COALESCE($3, category),
                weight = COALESCE($4, weight),
                order_index = COALESCE($5, order_index),
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(&input.text)
            .bind(&input.category)
            .bind(input.weight)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a question by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
