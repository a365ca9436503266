//! Assistant conversation history.

use gapply_core::ids::{AssessmentId, CriterionId};
use gapply_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

/// A row from the chat messages table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub role: String,
    pub content: String,
    pub criteria_id: Option<Uuid>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct NewChatMessage<'a> {
    pub assessment_id: AssessmentId,
    pub role: &'a str,
    pub content: &'a str,
    pub criteria_id: Option<CriterionId>,
}
