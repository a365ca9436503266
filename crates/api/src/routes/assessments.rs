//! Route definitions for the `/assessments` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::assessments;
use crate::state::AppState;

/// Routes mounted at `/assessments`.
///
/// ```text
/// POST /                  -> create_assessment
/// GET  /{id}              -> get_assessment
/// PUT  /{id}/onboarding   -> save_onboarding
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(assessments::create_assessment))
        .route("/{id}", get(assessments::get_assessment))
        .route("/{id}/onboarding", put(assessments::save_onboarding))
}
