//! Read-only access to the criteria catalog.

use gapply_core::ids::CriterionId;
use sqlx::PgPool;

use crate::models::criterion::Criterion;
use crate::names::StoreNames;

const COLUMNS: &str = "id, code, dimension, subdimension, title, description, \
                       level_1, level_2, level_3, level_4, level_5, position";

pub struct CriterionRepo;

impl CriterionRepo {
    /// All criteria belonging to a pack, in catalog order.
    pub async fn list_for_pack(
        pool: &PgPool,
        names: &StoreNames,
        pack: &str,
    ) -> Result<Vec<Criterion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE $1 = ANY(packs) ORDER BY position, code",
            names.criteria_table
        );
        sqlx::query_as::<_, Criterion>(&query)
            .bind(pack)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        names: &StoreNames,
        id: CriterionId,
    ) -> Result<Option<Criterion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", names.criteria_table);
        sqlx::query_as::<_, Criterion>(&query)
            .bind(id.as_uuid())
            .fetch_optional(pool)
            .await
    }
}
