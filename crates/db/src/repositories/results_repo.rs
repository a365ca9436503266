//! Computed assessment results.

use gapply_core::ids::AssessmentId;
use sqlx::PgPool;

use crate::names::StoreNames;

pub struct ResultsRepo;

impl ResultsRepo {
    /// Ask the results procedure for scores, gaps and ranked programs.
    pub async fn fetch(
        pool: &PgPool,
        names: &StoreNames,
        assessment_id: AssessmentId,
    ) -> Result<serde_json::Value, sqlx::Error> {
        let query = format!("SELECT {}($1::uuid)", names.get_results_rpc);
        sqlx::query_scalar::<_, serde_json::Value>(&query)
            .bind(assessment_id.as_uuid())
            .fetch_one(pool)
            .await
    }
}
