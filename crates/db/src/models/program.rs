//! Program execution models.

use chrono::NaiveDate;
use gapply_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// An activated program joined with its catalog entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgramInstance {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub program_id: Uuid,
    pub program_code: String,
    pub program_name: String,
    pub impact: i32,
    pub effort: i32,
    pub status: String,
    pub wave: Option<i32>,
    pub metrics: serde_json::Value,
    pub activated_at: Timestamp,
    pub closed_at: Option<Timestamp>,
}

/// One tracked action within a program instance.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActionInstance {
    pub id: Uuid,
    pub program_instance_id: Uuid,
    pub action_id: Uuid,
    pub action_code: String,
    pub title: String,
    pub status: String,
    pub position: i32,
    pub owner: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub impact_validated: bool,
    pub updated_at: Timestamp,
}
