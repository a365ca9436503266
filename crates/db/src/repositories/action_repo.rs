//! Repository for action instances within activated programs.

use gapply_core::ids::{ActionId, AssessmentId};
use gapply_core::status::ActionStatus;
use sqlx::PgPool;

use crate::models::program::ActionInstance;
use crate::names::StoreNames;

pub struct ActionRepo;

impl ActionRepo {
    /// Request a status transition. The procedure enforces which transitions
    /// are allowed and returns the updated action as JSON.
    pub async fn set_status(
        pool: &PgPool,
        names: &StoreNames,
        assessment_id: AssessmentId,
        action_id: ActionId,
        status: ActionStatus,
    ) -> Result<serde_json::Value, sqlx::Error> {
        let query = format!(
            "SELECT {}($1::uuid, $2::uuid, $3::text)",
            names.set_action_status_rpc
        );
        sqlx::query_scalar::<_, serde_json::Value>(&query)
            .bind(assessment_id.as_uuid())
            .bind(action_id.as_uuid())
            .bind(status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Record whether the expected impact of a completed action materialized.
    pub async fn validate_impact(
        pool: &PgPool,
        names: &StoreNames,
        assessment_id: AssessmentId,
        action_id: ActionId,
        validated: bool,
        impact_score: Option<i32>,
        notes: Option<&str>,
    ) -> Result<serde_json::Value, sqlx::Error> {
        let query = format!(
            "SELECT {}($1::uuid, $2::uuid, $3::boolean, $4::integer, $5::text)",
            names.validate_action_impact_rpc
        );
        sqlx::query_scalar::<_, serde_json::Value>(&query)
            .bind(assessment_id.as_uuid())
            .bind(action_id.as_uuid())
            .bind(validated)
            .bind(impact_score)
            .bind(notes)
            .fetch_one(pool)
            .await
    }

    /// Every tracked action of an assessment, grouped by program instance.
    pub async fn list_for_assessment(
        pool: &PgPool,
        names: &StoreNames,
        assessment_id: AssessmentId,
    ) -> Result<Vec<ActionInstance>, sqlx::Error> {
        let query = format!(
            "SELECT ai.id, ai.program_instance_id, ai.action_id, \
                    pa.code AS action_code, pa.title, ai.status, ai.position, ai.owner, \
                    ai.start_date, ai.due_date, ai.impact_validated, ai.updated_at \
             FROM {actions} ai \
             JOIN {catalog} pa ON pa.id = ai.action_id \
             WHERE ai.assessment_id = $1 \
             ORDER BY ai.program_instance_id, ai.position, pa.code",
            actions = names.action_instances_table,
            catalog = names.program_actions_table,
        );
        sqlx::query_as::<_, ActionInstance>(&query)
            .bind(assessment_id.as_uuid())
            .fetch_all(pool)
            .await
    }
}
