//! Repository for assessments: creation and onboarding go through stored
//! procedures, reads hit the table directly.

use gapply_core::ids::AssessmentId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::assessment::{Assessment, NewOrganization};
use crate::names::StoreNames;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, organization_id, pack, status, current_phase, onboarding_data, \
                       created_at, updated_at";

pub struct AssessmentRepo;

impl AssessmentRepo {
    /// Create an assessment (and its organization, when given).
    ///
    /// Returns the procedure's JSON result, which carries at least `id` and
    /// `pack`.
    pub async fn create(
        pool: &PgPool,
        names: &StoreNames,
        pack: &str,
        organization: Option<&NewOrganization>,
    ) -> Result<serde_json::Value, sqlx::Error> {
        let query = format!(
            "SELECT {}($1::text, $2::jsonb)",
            names.create_assessment_rpc
        );
        sqlx::query_scalar::<_, serde_json::Value>(&query)
            .bind(pack)
            .bind(organization.map(Json))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        names: &StoreNames,
        id: AssessmentId,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE id = $1",
            names.assessments_table
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(id.as_uuid())
            .fetch_optional(pool)
            .await
    }

    /// Merge onboarding answers into the assessment via the onboarding procedure.
    pub async fn save_onboarding(
        pool: &PgPool,
        names: &StoreNames,
        id: AssessmentId,
        onboarding_data: &serde_json::Value,
    ) -> Result<serde_json::Value, sqlx::Error> {
        let query = format!(
            "SELECT {}($1::uuid, $2::jsonb)",
            names.save_onboarding_rpc
        );
        sqlx::query_scalar::<_, serde_json::Value>(&query)
            .bind(id.as_uuid())
            .bind(onboarding_data)
            .fetch_one(pool)
            .await
    }
}
