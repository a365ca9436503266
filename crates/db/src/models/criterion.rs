//! Criteria catalog model.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One maturity-model question with its five level descriptions.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Criterion {
    pub id: Uuid,
    pub code: String,
    pub dimension: String,
    pub subdimension: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub level_1: Option<String>,
    pub level_2: Option<String>,
    pub level_3: Option<String>,
    pub level_4: Option<String>,
    pub level_5: Option<String>,
    pub position: i32,
}

impl Criterion {
    /// Level descriptions paired with their level number, skipping blanks.
    pub fn levels(&self) -> Vec<(i32, &str)> {
        [
            &self.level_1,
            &self.level_2,
            &self.level_3,
            &self.level_4,
            &self.level_5,
        ]
        .into_iter()
        .zip(1..)
        .filter_map(|(text, level)| {
            text.as_deref()
                .filter(|t| !t.trim().is_empty())
                .map(|t| (level, t))
        })
        .collect()
    }
}
