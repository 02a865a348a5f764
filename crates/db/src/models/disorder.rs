//! Disorder entity model and DTOs.

use mindcheck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `disorders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Disorder {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub symptoms: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new disorder.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDisorder {
    pub name: String,
    pub description: String,
    pub symptoms: Option<String>,
}

/// DTO for updating an existing disorder. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDisorder {
    pub name: Option<String>,
    pub description: Option<String>,
    pub symptoms: Option<String>,
}

/// A disorder joined with the titles of its remedies.
#[derive(Debug, Clone, Serialize)]
pub struct DisorderWithRemedies {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub symptoms: Option<String>,
    pub remedies: Vec<String>,
    pub created_at: Timestamp,
}

impl DisorderWithRemedies {
    pub fn from_parts(disorder: Disorder, remedies: Vec<String>) -> Self {
        Self {
            id: disorder.id,
            name: disorder.name,
            description: disorder.description,
            symptoms: disorder.symptoms,
            remedies,
            created_at: disorder.created_at,
        }
    }
}
