//! Repository for program activation and closure.

use gapply_core::ids::{AssessmentId, ProgramId, ProgramInstanceId};
use sqlx::PgPool;

use crate::models::program::ProgramInstance;
use crate::names::StoreNames;

pub struct ProgramRepo;

impl ProgramRepo {
    /// Activate a catalog program for an assessment, seeding its actions.
    pub async fn activate(
        pool: &PgPool,
        names: &StoreNames,
        assessment_id: AssessmentId,
        program_id: ProgramId,
        wave: Option<i32>,
    ) -> Result<serde_json::Value, sqlx::Error> {
        let query = format!(
            "SELECT {}($1::uuid, $2::uuid, $3::integer)",
            names.activate_program_rpc
        );
        sqlx::query_scalar::<_, serde_json::Value>(&query)
            .bind(assessment_id.as_uuid())
            .bind(program_id.as_uuid())
            .bind(wave)
            .fetch_one(pool)
            .await
    }

    /// Close a program instance. The procedure decides whether the program
    /// may be closed (the execution gate) and raises otherwise.
    pub async fn close(
        pool: &PgPool,
        names: &StoreNames,
        assessment_id: AssessmentId,
        program_instance_id: ProgramInstanceId,
    ) -> Result<serde_json::Value, sqlx::Error> {
        let query = format!(
            "SELECT {}($1::uuid, $2::uuid)",
            names.close_program_rpc
        );
        sqlx::query_scalar::<_, serde_json::Value>(&query)
            .bind(assessment_id.as_uuid())
            .bind(program_instance_id.as_uuid())
            .fetch_one(pool)
            .await
    }

    /// Activated programs of an assessment joined with their catalog entry.
    pub async fn list_instances(
        pool: &PgPool,
        names: &StoreNames,
        assessment_id: AssessmentId,
    ) -> Result<Vec<ProgramInstance>, sqlx::Error> {
        let query = format!(
            "SELECT pi.id, pi.assessment_id, pi.program_id, \
                    p.code AS program_code, p.name AS program_name, p.impact, p.effort, \
                    pi.status, pi.wave, pi.metrics, pi.activated_at, pi.closed_at \
             FROM {instances} pi \
             JOIN {programs} p ON p.id = pi.program_id \
             WHERE pi.assessment_id = $1 \
             ORDER BY pi.wave NULLS LAST, pi.activated_at",
            instances = names.program_instances_table,
            programs = names.programs_table,
        );
        sqlx::query_as::<_, ProgramInstance>(&query)
            .bind(assessment_id.as_uuid())
            .fetch_all(pool)
            .await
    }
}
