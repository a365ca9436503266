//! Handlers for the assistant conversation.

use axum::extract::State;
use axum::Json;
use gapply_ai::chat::{build_messages, system_prompt, ChatTurn, CriterionContext, Role};
use gapply_core::error::CoreError;
use gapply_core::ids::{AssessmentId, CriterionId};
use gapply_db::models::chat_message::{ChatMessage, NewChatMessage, ROLE_ASSISTANT, ROLE_USER};
use gapply_db::models::criterion::Criterion;
use gapply_db::repositories::{ChatMessageRepo, CriterionRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::{AppJson, AppQuery};
use crate::middleware::request_id::RequestId;
use crate::query::ChatMessagesQuery;
use crate::response::OkResponse;
use crate::state::AppState;

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Conversation so far, ending with the user's new message.
    #[serde(default)]
    pub messages: Vec<ChatTurn>,
    #[serde(rename = "assessmentId")]
    pub assessment_id: Option<String>,
    #[serde(rename = "criteriaId", alias = "criterionId")]
    pub criteria_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct MessagesPayload {
    pub messages: Vec<ChatMessage>,
}

/// POST /api/v1/chat
///
/// Ask the assistant. With `criteriaId` the criterion's level descriptions
/// are folded into the system prompt; with `assessmentId` the user turn and
/// the reply are stored.
pub async fn send_message(
    State(state): State<AppState>,
    _user: AuthUser,
    request_id: RequestId,
    AppJson(input): AppJson<ChatRequest>,
) -> AppResult<Json<OkResponse<ChatReply>>> {
    let assessment_id =
        AssessmentId::parse_optional("assessmentId", input.assessment_id.as_deref())?;
    let criterion_id = CriterionId::parse_optional("criteriaId", input.criteria_id.as_deref())?;

    let user_turn = input
        .messages
        .iter()
        .rev()
        .find(|t| t.role == Role::User && !t.content.trim().is_empty())
        .ok_or_else(|| CoreError::Validation("messages must include a user message".into()))?;

    let context = match criterion_id {
        Some(id) => {
            let criterion = CriterionRepo::find_by_id(&state.pool, &state.names, id)
                .await?
                .ok_or_else(|| CoreError::NotFound {
                    entity: "Criterion",
                    id: id.to_string(),
                })?;
            Some(criterion_context(&criterion))
        }
        None => None,
    };

    if let Some(assessment_id) = assessment_id {
        ChatMessageRepo::create(
            &state.pool,
            &state.names,
            &NewChatMessage {
                assessment_id,
                role: ROLE_USER,
                content: &user_turn.content,
                criteria_id: criterion_id,
            },
        )
        .await?;
    }

    let messages = build_messages(system_prompt(context.as_ref()), &input.messages);
    let reply = state.providers.chat.complete(&messages).await?;

    if let Some(assessment_id) = assessment_id {
        ChatMessageRepo::create(
            &state.pool,
            &state.names,
            &NewChatMessage {
                assessment_id,
                role: ROLE_ASSISTANT,
                content: &reply,
                criteria_id: criterion_id,
            },
        )
        .await?;
        tracing::debug!(assessment_id = %assessment_id, "Chat exchange stored");
    }

    Ok(Json(
        OkResponse::new(ChatReply { reply }).with_request_id(request_id),
    ))
}

/// GET /api/v1/chat/messages?assessmentId=&limit=
pub async fn list_messages(
    State(state): State<AppState>,
    _user: AuthUser,
    AppQuery(params): AppQuery<ChatMessagesQuery>,
) -> AppResult<Json<OkResponse<MessagesPayload>>> {
    let assessment_id =
        AssessmentId::parse_required("assessmentId", params.assessment_id.as_deref())?;

    let messages =
        ChatMessageRepo::list(&state.pool, &state.names, assessment_id, params.limit).await?;
    Ok(Json(OkResponse::new(MessagesPayload { messages })))
}

fn criterion_context(criterion: &Criterion) -> CriterionContext {
    CriterionContext {
        code: criterion.code.clone(),
        title: criterion.title.clone(),
        dimension: criterion.dimension.clone(),
        levels: criterion
            .levels()
            .into_iter()
            .map(|(level, text)| (level, text.to_string()))
            .collect(),
    }
}
