//! Remedy entity model and DTOs.

use mindcheck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `remedies` table.
///
/// `category` is an open string vocabulary (therapy, medication,
/// lifestyle), not an enum.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Remedy {
    pub id: DbId,
    pub disorder_id: DbId,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new remedy.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRemedy {
    pub disorder_id: DbId,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
}

/// DTO for updating an existing remedy. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRemedy {
    pub disorder_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}
