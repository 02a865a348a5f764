//! Repository for the `disorders` table.

use mindcheck_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::disorder::{CreateDisorder, Disorder, UpdateDisorder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, symptoms, created_at";

/// Provides CRUD operations for disorders.
pub struct DisorderRepo;

impl DisorderRepo {
    /// Insert a new disorder, returning the created row.
    ///
    /// `disorders.name` carries a UNIQUE constraint, so a concurrent insert
    /// of the same name fails at the store instead of racing past the
    /// handler's exists-check.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateDisorder,
    ) -> Result<Disorder, sqlx::Error> {
        let query = format!(
            "INSERT INTO disorders (name, description, symptoms)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Disorder>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.symptoms)
            .fetch_one(pool)
            .await
    }

    /// Find a disorder by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Disorder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM disorders WHERE id = $1");
        sqlx::query_as::<_, Disorder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a disorder by exact name. Backs the create exists-check.
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Disorder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM disorders WHERE name = $1");
        sqlx::query_as::<_, Disorder>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all disorders, oldest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Disorder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM disorders ORDER BY id");
        sqlx::query_as::<_, Disorder>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring search on the disorder name.
    pub async fn search_by_name(
        pool: &SqlitePool,
        fragment: &str,
    ) -> Result<Vec<Disorder>, sqlx::Error> {
        // SQLite LIKE is case-insensitive for ASCII by default.
        let query = format!(
            "SELECT {COLUMNS} FROM disorders
             WHERE name LIKE '%' || $1 || '%'
             ORDER BY id"
        );
        sqlx::query_as::<_, Disorder>(&query)
            .bind(fragment)
            .fetch_all(pool)
            .await
    }

    /// Update a disorder. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateDisorder,
    ) -> Result<Option<Disorder>, sqlx::Error> {
        let query = format!(
            "UPDATE disorders SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                symptoms = COALESCE($4, symptoms)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Disorder>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.symptoms)
            .fetch_optional(pool)
            .await
    }

    /// Delete a disorder by ID. Returns `true` if a row was removed.
    ///
    /// Dependent remedies are removed in the same statement via
    /// `ON DELETE CASCADE`, so the cascade is atomic with the parent
    /// deletion.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM disorders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of disorder rows. Backs the seed no-op check.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM disorders")
            .fetch_one(pool)
            .await
    }
}
