//! Question entity model and DTOs.

use mindcheck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `questions` table.
///
/// `weight` is stored but never consulted by scoring. `is_active` is an
/// integer 0/1 flag; `order_index` orders active questions for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub text: String,
    pub category: Option<String>,
    pub weight: i64,
    pub order_index: i64,
    pub is_active: i64,
    pub created_at: Timestamp,
}

/// DTO for creating a new question.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    pub text: String,
    pub category: Option<String>,
    /// Defaults to 1 if omitted.
    pub weight: Option<i64>,
    /// Defaults to 0 if omitted.
    pub order_index: Option<i64>,
    /// Defaults to 1 (active) if omitted.
    pub is_active: Option<i64>,
}

/// DTO for updating an existing question. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuestion {
    pub text: Option<String>,
    pub category: Option<String>,
    pub weight: Option<i64>,
    pub order_index: Option<i64>,
    pub is_active: Option<i64>,
}
