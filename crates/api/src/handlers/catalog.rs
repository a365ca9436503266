//! Handlers for the criteria packs and the criteria catalog.

use axum::extract::State;
use axum::Json;
use gapply_core::error::CoreError;
use gapply_core::packs::{validate_pack, Pack, PACKS};
use gapply_db::models::criterion::Criterion;
use gapply_db::repositories::CriterionRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::AppQuery;
use crate::query::PackQuery;
use crate::response::OkResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PacksPayload {
    pub packs: &'static [Pack],
}

#[derive(Debug, Serialize)]
pub struct CriteriaPayload {
    pub pack: &'static str,
    pub criteria: Vec<Criterion>,
}

/// GET /api/v1/packs
pub async fn list_packs(_user: AuthUser) -> Json<OkResponse<PacksPayload>> {
    Json(OkResponse::new(PacksPayload { packs: PACKS }))
}

/// GET /api/v1/criteria?pack=
pub async fn list_criteria(
    State(state): State<AppState>,
    _user: AuthUser,
    AppQuery(params): AppQuery<PackQuery>,
) -> AppResult<Json<OkResponse<CriteriaPayload>>> {
    let raw = params
        .pack
        .ok_or_else(|| CoreError::Validation("pack is required".into()))?;
    let pack = validate_pack(&raw)?;

    let criteria = CriterionRepo::list_for_pack(&state.pool, &state.names, pack).await?;
    Ok(Json(OkResponse::new(CriteriaPayload { pack, criteria })))
}
