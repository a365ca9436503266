//! Handlers for the `/actions` resource.
//!
//! The database decides which status transitions are allowed and when an
//! impact can be validated; these handlers only normalize and forward.

use axum::extract::State;
use axum::Json;
use gapply_core::error::CoreError;
use gapply_core::ids::{ActionId, AssessmentId};
use gapply_core::levels::{validate_level, validate_notes};
use gapply_core::status::ActionStatus;
use gapply_db::repositories::ActionRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::AppJson;
use crate::middleware::request_id::RequestId;
use crate::response::OkResponse;
use crate::state::AppState;

/// Request body for `POST /actions/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    #[serde(rename = "assessmentId")]
    pub assessment_id: Option<String>,
    #[serde(rename = "actionId")]
    pub action_id: Option<String>,
    pub status: Option<String>,
}

/// Request body for `POST /actions/validate-impact`.
#[derive(Debug, Deserialize)]
pub struct ValidateImpactRequest {
    #[serde(rename = "assessmentId")]
    pub assessment_id: Option<String>,
    #[serde(rename = "actionId")]
    pub action_id: Option<String>,
    /// Defaults to `true`; `false` withdraws an earlier validation.
    pub validated: Option<bool>,
    #[serde(alias = "impactScore")]
    pub impact_score: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ActionPayload {
    /// The procedure's result, unchanged.
    pub action: serde_json::Value,
}

/// POST /api/v1/actions/status
pub async fn set_status(
    State(state): State<AppState>,
    user: AuthUser,
    request_id: RequestId,
    AppJson(input): AppJson<SetStatusRequest>,
) -> AppResult<Json<OkResponse<ActionPayload>>> {
    let assessment_id =
        AssessmentId::parse_required("assessmentId", input.assessment_id.as_deref())?;
    let action_id = ActionId::parse_required("actionId", input.action_id.as_deref())?;
    let status = input
        .status
        .as_deref()
        .ok_or_else(|| CoreError::Validation("status is required".into()))
        .and_then(ActionStatus::parse)?;

    let action =
        ActionRepo::set_status(&state.pool, &state.names, assessment_id, action_id, status)
            .await?;

    tracing::info!(
        assessment_id = %assessment_id,
        action_id = %action_id,
        status = status.as_str(),
        user = %user.username,
        "Action status updated"
    );

    Ok(Json(
        OkResponse::new(ActionPayload { action }).with_request_id(request_id),
    ))
}

/// POST /api/v1/actions/validate-impact
pub async fn validate_impact(
    State(state): State<AppState>,
    user: AuthUser,
    request_id: RequestId,
    AppJson(input): AppJson<ValidateImpactRequest>,
) -> AppResult<Json<OkResponse<ActionPayload>>> {
    let assessment_id =
        AssessmentId::parse_required("assessmentId", input.assessment_id.as_deref())?;
    let action_id = ActionId::parse_required("actionId", input.action_id.as_deref())?;
    validate_level("impact_score", input.impact_score)?;
    validate_notes("notes", input.notes.as_deref())?;
    let validated = input.validated.unwrap_or(true);

    let action = ActionRepo::validate_impact(
        &state.pool,
        &state.names,
        assessment_id,
        action_id,
        validated,
        input.impact_score,
        input.notes.as_deref(),
    )
    .await?;

    tracing::info!(
        assessment_id = %assessment_id,
        action_id = %action_id,
        validated,
        user = %user.username,
        "Action impact validation recorded"
    );

    Ok(Json(
        OkResponse::new(ActionPayload { action }).with_request_id(request_id),
    ))
}
