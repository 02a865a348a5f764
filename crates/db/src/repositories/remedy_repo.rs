//! Repository for the `remedies` table.

use mindcheck_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::remedy::{CreateRemedy, Remedy, UpdateRemedy};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, disorder_id, title, description, category, created_at";

/// Provides CRUD operations for remedies.
pub struct RemedyRepo;

impl RemedyRepo {
    /// Insert a new remedy, returning the created row.
    ///
    /// Fails with a foreign key violation if `disorder_id` does not
    /// reference an existing disorder.
    pub async fn create(pool: &SqlitePool, input: &CreateRemedy) -> Result<Remedy, sqlx::Error> {
        let query = format!(
            "INSERT INTO remedies (disorder_id, title, description, category)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Remedy>(&query)
            .bind(input.disorder_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a remedy by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Remedy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM remedies WHERE id = $1");
        sqlx::query_as::<_, Remedy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all remedies, oldest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Remedy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM remedies ORDER BY id");
        sqlx::query_as::<_, Remedy>(&query).fetch_all(pool).await
    }

    /// List remedies belonging to one disorder, oldest first.
    pub async fn list_by_disorder(
        pool: &SqlitePool,
        disorder_id: DbId,
    ) -> Result<Vec<Remedy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM remedies WHERE disorder_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, Remedy>(&query)
            .bind(disorder_id)
            .fetch_all(pool)
            .await
    }

    /// Titles of the remedies belonging to one disorder, oldest first.
    ///
    /// Backs the "disorder with remedies" composite read.
    pub async fn titles_for_disorder(
        pool: &SqlitePool,
        disorder_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT title FROM remedies WHERE disorder_id = $1 ORDER BY id")
            .bind(disorder_id)
            .fetch_all(pool)
            .await
    }

    /// Update a remedy. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateRemedy,
    ) -> Result<Option<Remedy>, sqlx::Error> {
        let query = format!(
            "UPDATE remedies SET
                disorder_id = COALESCE($2, disorder_id),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                category = COALESCE($5, category)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Remedy>(&query)
            .bind(id)
            .bind(input.disorder_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    /// Delete a remedy by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM remedies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
