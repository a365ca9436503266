//! Repository for assistant conversation history.

use gapply_core::ids::AssessmentId;
use sqlx::PgPool;

use crate::models::chat_message::{ChatMessage, NewChatMessage};
use crate::names::StoreNames;

const COLUMNS: &str = "id, assessment_id, role, content, criteria_id, created_at";

/// Default number of messages returned by [`ChatMessageRepo::list`].
const DEFAULT_LIMIT: i64 = 100;

/// Maximum number of messages returned by [`ChatMessageRepo::list`].
const MAX_LIMIT: i64 = 500;

pub struct ChatMessageRepo;

impl ChatMessageRepo {
    pub async fn create(
        pool: &PgPool,
        names: &StoreNames,
        input: &NewChatMessage<'_>,
    ) -> Result<ChatMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (assessment_id, role, content, criteria_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}",
            names.chat_messages_table
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(input.assessment_id.as_uuid())
            .bind(input.role)
            .bind(input.content)
            .bind(input.criteria_id.map(|c| c.as_uuid()))
            .fetch_one(pool)
            .await
    }

    /// The most recent messages of an assessment, returned oldest first.
    pub async fn list(
        pool: &PgPool,
        names: &StoreNames,
        assessment_id: AssessmentId,
        limit: Option<i64>,
    ) -> Result<Vec<ChatMessage>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let query = format!(
            "SELECT {COLUMNS} FROM ( \
                 SELECT {COLUMNS} FROM {} WHERE assessment_id = $1 \
                 ORDER BY created_at DESC LIMIT $2 \
             ) recent ORDER BY created_at",
            names.chat_messages_table
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(assessment_id.as_uuid())
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
