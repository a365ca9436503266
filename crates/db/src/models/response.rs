//! Assessment response models.

use gapply_core::ids::{AssessmentId, CriterionId};
use gapply_core::levels::ResponseScores;
use gapply_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the responses table. One per (assessment, criterion).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssessmentResponse {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub criterion_id: Uuid,
    pub as_is_level: Option<i32>,
    pub to_be_level: Option<i32>,
    pub importance: Option<i32>,
    pub confidence: Option<i32>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated input for an upsert. Absent scores keep the stored value.
#[derive(Debug, Clone)]
pub struct UpsertResponse {
    pub assessment_id: AssessmentId,
    pub criterion_id: CriterionId,
    pub scores: ResponseScores,
    pub notes: Option<String>,
}
