//! Repository for assessment responses.
//!
//! Upserts rely on the `(assessment_id, criterion_id)` unique constraint:
//! the last write for a pair wins, and scores omitted from a write keep
//! their stored values.

use gapply_core::ids::{AssessmentId, CriterionId};
use sqlx::PgPool;

use crate::models::response::{AssessmentResponse, UpsertResponse};
use crate::names::StoreNames;

const COLUMNS: &str = "id, assessment_id, criterion_id, as_is_level, to_be_level, importance, \
                       confidence, notes, created_at, updated_at";

pub struct ResponseRepo;

impl ResponseRepo {
    pub async fn upsert(
        pool: &PgPool,
        names: &StoreNames,
        input: &UpsertResponse,
    ) -> Result<AssessmentResponse, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} AS r \
                 (assessment_id, criterion_id, as_is_level, to_be_level, importance, confidence, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (assessment_id, criterion_id) DO UPDATE SET \
                 as_is_level = COALESCE(EXCLUDED.as_is_level, r.as_is_level), \
                 to_be_level = COALESCE(EXCLUDED.to_be_level, r.to_be_level), \
                 importance = COALESCE(EXCLUDED.importance, r.importance), \
                 confidence = COALESCE(EXCLUDED.confidence, r.confidence), \
                 notes = COALESCE(EXCLUDED.notes, r.notes), \
                 updated_at = NOW() \
             RETURNING {COLUMNS}",
            table = names.responses_table
        );
        sqlx::query_as::<_, AssessmentResponse>(&query)
            .bind(input.assessment_id.as_uuid())
            .bind(input.criterion_id.as_uuid())
            .bind(input.scores.as_is_level)
            .bind(input.scores.to_be_level)
            .bind(input.scores.importance)
            .bind(input.scores.confidence)
            .bind(input.notes.as_deref())
            .fetch_one(pool)
            .await
    }

    /// List responses for an assessment, optionally narrowed to one criterion.
    pub async fn list(
        pool: &PgPool,
        names: &StoreNames,
        assessment_id: AssessmentId,
        criterion_id: Option<CriterionId>,
    ) -> Result<Vec<AssessmentResponse>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} \
             WHERE assessment_id = $1 AND ($2::uuid IS NULL OR criterion_id = $2) \
             ORDER BY created_at",
            names.responses_table
        );
        sqlx::query_as::<_, AssessmentResponse>(&query)
            .bind(assessment_id.as_uuid())
            .bind(criterion_id.map(|c| c.as_uuid()))
            .fetch_all(pool)
            .await
    }
}
