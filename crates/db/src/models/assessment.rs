//! Assessment and organization models.

use gapply_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the assessments table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assessment {
    pub id: Uuid,
    pub organization_id: Option<Uuid>,
    pub pack: String,
    pub status: String,
    pub current_phase: String,
    pub onboarding_data: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Organization details captured when an assessment is created.
///
/// Passed to the creation procedure as a JSON object.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewOrganization {
    pub name: String,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub country: Option<String>,
}
