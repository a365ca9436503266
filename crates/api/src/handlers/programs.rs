//! Handlers for the `/programs` resource.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use gapply_core::ids::{AssessmentId, ProgramId, ProgramInstanceId};
use gapply_core::progress::ExecutionProgress;
use gapply_core::quadrant::{quadrant_of, Quadrant};
use gapply_core::status::ActionStatus;
use gapply_db::models::program::{ActionInstance, ProgramInstance};
use gapply_db::repositories::{ActionRepo, ProgramRepo};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::{AppJson, AppQuery};
use crate::middleware::request_id::RequestId;
use crate::query::AssessmentQuery;
use crate::response::OkResponse;
use crate::state::AppState;

/// Request body for `POST /programs/activate`.
#[derive(Debug, Deserialize)]
pub struct ActivateProgramRequest {
    #[serde(rename = "assessmentId")]
    pub assessment_id: Option<String>,
    #[serde(rename = "programId")]
    pub program_id: Option<String>,
    pub wave: Option<i32>,
}

/// Request body for `POST /programs/close`.
#[derive(Debug, Deserialize)]
pub struct CloseProgramRequest {
    #[serde(rename = "assessmentId")]
    pub assessment_id: Option<String>,
    #[serde(rename = "programInstanceId")]
    pub program_instance_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProgramPayload {
    /// The procedure's result, unchanged.
    pub program: serde_json::Value,
}

/// One activated program with its actions and progress.
#[derive(Debug, Serialize)]
pub struct ProgramExecution {
    #[serde(flatten)]
    pub instance: ProgramInstance,
    pub quadrant: Quadrant,
    pub progress: ExecutionProgress,
    pub actions: Vec<ActionInstance>,
}

#[derive(Debug, Serialize)]
pub struct ExecutionPayload {
    pub programs: Vec<ProgramExecution>,
    /// Totals across every program of the assessment.
    pub overall: ExecutionProgress,
}

/// POST /api/v1/programs/activate
///
/// Activate a catalog program for an assessment. The procedure creates the
/// program's action instances.
pub async fn activate_program(
    State(state): State<AppState>,
    user: AuthUser,
    request_id: RequestId,
    AppJson(input): AppJson<ActivateProgramRequest>,
) -> AppResult<Json<OkResponse<ProgramPayload>>> {
    let assessment_id =
        AssessmentId::parse_required("assessmentId", input.assessment_id.as_deref())?;
    let program_id = ProgramId::parse_required("programId", input.program_id.as_deref())?;

    let program =
        ProgramRepo::activate(&state.pool, &state.names, assessment_id, program_id, input.wave)
            .await?;

    tracing::info!(
        assessment_id = %assessment_id,
        program_id = %program_id,
        user = %user.username,
        "Program activated"
    );

    Ok(Json(
        OkResponse::new(ProgramPayload { program }).with_request_id(request_id),
    ))
}

/// POST /api/v1/programs/close
///
/// The procedure refuses to close a program that still has open actions.
pub async fn close_program(
    State(state): State<AppState>,
    user: AuthUser,
    request_id: RequestId,
    AppJson(input): AppJson<CloseProgramRequest>,
) -> AppResult<Json<OkResponse<ProgramPayload>>> {
    let assessment_id =
        AssessmentId::parse_required("assessmentId", input.assessment_id.as_deref())?;
    let instance_id = ProgramInstanceId::parse_required(
        "programInstanceId",
        input.program_instance_id.as_deref(),
    )?;

    let program =
        ProgramRepo::close(&state.pool, &state.names, assessment_id, instance_id).await?;

    tracing::info!(
        assessment_id = %assessment_id,
        program_instance_id = %instance_id,
        user = %user.username,
        "Program closed"
    );

    Ok(Json(
        OkResponse::new(ProgramPayload { program }).with_request_id(request_id),
    ))
}

/// GET /api/v1/programs/execution?assessmentId=
///
/// Activated programs with their actions and completion percentages.
pub async fn execution(
    State(state): State<AppState>,
    _user: AuthUser,
    AppQuery(params): AppQuery<AssessmentQuery>,
) -> AppResult<Json<OkResponse<ExecutionPayload>>> {
    let assessment_id =
        AssessmentId::parse_required("assessmentId", params.assessment_id.as_deref())?;

    let instances = ProgramRepo::list_instances(&state.pool, &state.names, assessment_id).await?;
    let actions =
        ActionRepo::list_for_assessment(&state.pool, &state.names, assessment_id).await?;

    Ok(Json(OkResponse::new(build_execution(instances, actions))))
}

/// Group actions under their program instance and compute progress.
///
/// Actions whose instance is not in `instances` are dropped.
pub fn build_execution(
    instances: Vec<ProgramInstance>,
    actions: Vec<ActionInstance>,
) -> ExecutionPayload {
    let mut by_instance: HashMap<Uuid, Vec<ActionInstance>> = HashMap::new();
    for action in actions {
        by_instance
            .entry(action.program_instance_id)
            .or_default()
            .push(action);
    }

    let programs: Vec<ProgramExecution> = instances
        .into_iter()
        .map(|instance| {
            let mut actions = by_instance.remove(&instance.id).unwrap_or_default();
            actions.sort_by_key(|a| a.position);
            let progress = ExecutionProgress::from_statuses(
                actions.iter().map(|a| ActionStatus::from_stored(&a.status)),
            );
            ProgramExecution {
                quadrant: quadrant_of(instance.impact, instance.effort),
                instance,
                progress,
                actions,
            }
        })
        .collect();

    let overall = ExecutionProgress::merge(programs.iter().map(|p| p.progress));

    ExecutionPayload { programs, overall }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn instance(impact: i32, effort: i32) -> ProgramInstance {
        ProgramInstance {
            id: Uuid::new_v4(),
            assessment_id: Uuid::new_v4(),
            program_id: Uuid::new_v4(),
            program_code: "PRG-01".into(),
            program_name: "Customer data platform".into(),
            impact,
            effort,
            status: "active".into(),
            wave: Some(1),
            metrics: serde_json::json!({}),
            activated_at: Utc::now(),
            closed_at: None,
        }
    }

    fn action(instance_id: Uuid, position: i32, status: &str) -> ActionInstance {
        ActionInstance {
            id: Uuid::new_v4(),
            program_instance_id: instance_id,
            action_id: Uuid::new_v4(),
            action_code: format!("ACT-{position:02}"),
            title: "Do the thing".into(),
            status: status.into(),
            position,
            owner: None,
            start_date: None,
            due_date: None,
            impact_validated: false,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn groups_actions_and_computes_progress() {
        let a = instance(4, 1);
        let b = instance(2, 4);
        let actions = vec![
            action(a.id, 2, "done"),
            action(a.id, 1, "doing"),
            action(a.id, 3, "done"),
            action(a.id, 4, "todo"),
            action(b.id, 1, "todo"),
        ];

        let payload = build_execution(vec![a, b], actions);

        let first = &payload.programs[0];
        assert_eq!(first.quadrant, Quadrant::QuickWin);
        assert_eq!(first.progress.total, 4);
        assert_eq!(first.progress.done, 2);
        assert_eq!(first.progress.completion_pct, 50);
        let positions: Vec<i32> = first.actions.iter().map(|a| a.position).collect();
        assert_eq!(positions, [1, 2, 3, 4]);

        assert_eq!(payload.programs[1].quadrant, Quadrant::Foundation);
        assert_eq!(payload.programs[1].progress.completion_pct, 0);

        assert_eq!(payload.overall.total, 5);
        assert_eq!(payload.overall.done, 2);
        assert_eq!(payload.overall.completion_pct, 40);
    }

    #[test]
    fn no_programs_means_zero_progress() {
        let payload = build_execution(Vec::new(), Vec::new());
        assert!(payload.programs.is_empty());
        assert_eq!(payload.overall, ExecutionProgress::default());
    }

    #[test]
    fn execution_serializes_instance_fields_flat() {
        let a = instance(3, 3);
        let payload = build_execution(vec![a], Vec::new());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["programs"][0]["program_code"], "PRG-01");
        assert_eq!(json["programs"][0]["quadrant"], "transformational");
        assert_eq!(json["overall"]["completion_pct"], 0);
    }
}
