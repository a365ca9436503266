//! Handler for `GET /results`.
//!
//! Scores, gaps, and program ranking come from the results procedure
//! unchanged. The only thing added here is each program's quadrant, derived
//! from its impact and effort.

use axum::extract::State;
use axum::Json;
use gapply_core::ids::AssessmentId;
use gapply_core::quadrant::quadrant_of;
use gapply_db::repositories::ResultsRepo;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::AppQuery;
use crate::middleware::request_id::RequestId;
use crate::query::AssessmentQuery;
use crate::response::OkResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResultsPayload {
    pub results: Value,
}

/// GET /api/v1/results?assessmentId=
pub async fn get_results(
    State(state): State<AppState>,
    _user: AuthUser,
    request_id: RequestId,
    AppQuery(params): AppQuery<AssessmentQuery>,
) -> AppResult<Json<OkResponse<ResultsPayload>>> {
    let assessment_id =
        AssessmentId::parse_required("assessmentId", params.assessment_id.as_deref())?;

    let mut results = ResultsRepo::fetch(&state.pool, &state.names, assessment_id).await?;
    annotate_programs(&mut results);

    Ok(Json(
        OkResponse::new(ResultsPayload { results }).with_request_id(request_id),
    ))
}

/// Add `quadrant` to every program that carries integer `impact` and
/// `effort`. Every other field, ranking included, is passed through as is.
///
/// Programs without usable scores are left untouched.
pub fn annotate_programs(results: &mut Value) {
    let Some(programs) = results.get_mut("programs").and_then(Value::as_array_mut) else {
        return;
    };

    for program in programs.iter_mut().filter_map(Value::as_object_mut) {
        let impact = program.get("impact").and_then(as_i32);
        let effort = program.get("effort").and_then(as_i32);
        if let (Some(impact), Some(effort)) = (impact, effort) {
            program.insert(
                "quadrant".into(),
                Value::from(quadrant_of(impact, effort).as_str()),
            );
        }
    }
}

fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|v| i32::try_from(v).ok())
}
