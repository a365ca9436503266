//! Handlers for the `/responses` resource.

use axum::extract::State;
use axum::Json;
use gapply_core::ids::{AssessmentId, CriterionId};
use gapply_core::levels::{validate_notes, ResponseScores};
use gapply_db::models::response::{AssessmentResponse, UpsertResponse};
use gapply_db::repositories::ResponseRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::{AppJson, AppQuery};
use crate::middleware::request_id::RequestId;
use crate::query::ResponsesQuery;
use crate::response::OkResponse;
use crate::state::AppState;

/// Request body for `POST /responses`.
///
/// Omitted scores keep whatever is already stored for the criterion.
#[derive(Debug, Deserialize)]
pub struct UpsertResponseRequest {
    #[serde(rename = "assessmentId")]
    pub assessment_id: Option<String>,
    #[serde(rename = "criteriaId", alias = "criterionId")]
    pub criteria_id: Option<String>,
    pub as_is_level: Option<i32>,
    pub to_be_level: Option<i32>,
    pub importance: Option<i32>,
    pub confidence: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResponsePayload {
    pub response: AssessmentResponse,
}

#[derive(Debug, Serialize)]
pub struct ResponsesPayload {
    pub responses: Vec<AssessmentResponse>,
}

/// POST /api/v1/responses
///
/// Insert or update the answer for one (assessment, criterion) pair.
pub async fn upsert_response(
    State(state): State<AppState>,
    _user: AuthUser,
    request_id: RequestId,
    AppJson(input): AppJson<UpsertResponseRequest>,
) -> AppResult<Json<OkResponse<ResponsePayload>>> {
    let assessment_id =
        AssessmentId::parse_required("assessmentId", input.assessment_id.as_deref())?;
    let criterion_id = CriterionId::parse_required("criteriaId", input.criteria_id.as_deref())?;

    let scores = ResponseScores {
        as_is_level: input.as_is_level,
        to_be_level: input.to_be_level,
        importance: input.importance,
        confidence: input.confidence,
    };
    scores.validate()?;
    validate_notes("notes", input.notes.as_deref())?;

    let response = ResponseRepo::upsert(
        &state.pool,
        &state.names,
        &UpsertResponse {
            assessment_id,
            criterion_id,
            scores,
            notes: input.notes,
        },
    )
    .await?;

    tracing::debug!(
        assessment_id = %assessment_id,
        criterion_id = %criterion_id,
        "Response saved"
    );

    Ok(Json(
        OkResponse::new(ResponsePayload { response }).with_request_id(request_id),
    ))
}

/// GET /api/v1/responses?assessmentId=&criteriaId=
pub async fn list_responses(
    State(state): State<AppState>,
    _user: AuthUser,
    AppQuery(params): AppQuery<ResponsesQuery>,
) -> AppResult<Json<OkResponse<ResponsesPayload>>> {
    let assessment_id =
        AssessmentId::parse_required("assessmentId", params.assessment_id.as_deref())?;
    let criterion_id = CriterionId::parse_optional("criteriaId", params.criteria_id.as_deref())?;

    let responses =
        ResponseRepo::list(&state.pool, &state.names, assessment_id, criterion_id).await?;
    Ok(Json(OkResponse::new(ResponsesPayload { responses })))
}
