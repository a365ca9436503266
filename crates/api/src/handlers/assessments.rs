//! Handlers for the `/assessments` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gapply_core::error::CoreError;
use gapply_core::ids::AssessmentId;
use gapply_core::levels::validate_object;
use gapply_core::packs::validate_pack;
use gapply_db::models::assessment::{Assessment, NewOrganization};
use gapply_db::repositories::AssessmentRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::{AppJson, AppPath};
use crate::middleware::request_id::RequestId;
use crate::response::OkResponse;
use crate::state::AppState;

/// Request body for `POST /assessments`.
#[derive(Debug, Deserialize)]
pub struct CreateAssessmentRequest {
    pub pack: Option<String>,
    pub organization: Option<NewOrganization>,
}

#[derive(Debug, Serialize)]
pub struct CreatedAssessment {
    #[serde(rename = "assessmentId")]
    pub assessment_id: String,
    pub pack: &'static str,
    /// The creation procedure's result, unchanged.
    pub assessment: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct AssessmentPayload {
    pub assessment: Assessment,
}

/// Request body for `PUT /assessments/{id}/onboarding`.
#[derive(Debug, Deserialize)]
pub struct SaveOnboardingRequest {
    #[serde(alias = "onboardingData", alias = "data")]
    pub onboarding_data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct OnboardingPayload {
    pub assessment: serde_json::Value,
}

/// POST /api/v1/assessments
///
/// Create an assessment for a criteria pack, optionally with organization details.
pub async fn create_assessment(
    State(state): State<AppState>,
    user: AuthUser,
    request_id: RequestId,
    AppJson(input): AppJson<CreateAssessmentRequest>,
) -> AppResult<(StatusCode, Json<OkResponse<CreatedAssessment>>)> {
    let raw_pack = input
        .pack
        .ok_or_else(|| CoreError::Validation("pack is required".into()))?;
    let pack = validate_pack(&raw_pack)?;

    let organization = input
        .organization
        .filter(|org| !org.name.trim().is_empty());

    let assessment =
        AssessmentRepo::create(&state.pool, &state.names, pack, organization.as_ref()).await?;

    let assessment_id = assessment
        .get("id")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            AppError::InternalError("create_assessment returned no assessment id".into())
        })?;

    tracing::info!(
        assessment_id = %assessment_id,
        pack,
        user = %user.username,
        "Assessment created"
    );

    Ok((
        StatusCode::CREATED,
        Json(
            OkResponse::new(CreatedAssessment {
                assessment_id,
                pack,
                assessment,
            })
            .with_request_id(request_id),
        ),
    ))
}

/// GET /api/v1/assessments/{id}
pub async fn get_assessment(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<OkResponse<AssessmentPayload>>> {
    let id = AssessmentId::parse("id", &id)?;

    let assessment = AssessmentRepo::find_by_id(&state.pool, &state.names, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Assessment",
            id: id.to_string(),
        })?;

    Ok(Json(OkResponse::new(AssessmentPayload { assessment })))
}

/// PUT /api/v1/assessments/{id}/onboarding
///
/// Merge onboarding answers into the assessment. The procedure advances the
/// phase past onboarding.
pub async fn save_onboarding(
    State(state): State<AppState>,
    _user: AuthUser,
    request_id: RequestId,
    AppPath(id): AppPath<String>,
    AppJson(input): AppJson<SaveOnboardingRequest>,
) -> AppResult<Json<OkResponse<OnboardingPayload>>> {
    let id = AssessmentId::parse("id", &id)?;
    let data = input
        .onboarding_data
        .ok_or_else(|| CoreError::Validation("onboarding_data is required".into()))?;
    validate_object("onboarding_data", &data)?;

    let assessment = AssessmentRepo::save_onboarding(&state.pool, &state.names, id, &data).await?;

    tracing::info!(assessment_id = %id, "Onboarding saved");

    Ok(Json(
        OkResponse::new(OnboardingPayload { assessment }).with_request_id(request_id),
    ))
}
