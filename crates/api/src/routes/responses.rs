//! Route definitions for the `/responses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::responses;
use crate::state::AppState;

/// Routes mounted at `/responses`.
///
/// ```text
/// POST /                              -> upsert_response
/// GET  /?assessmentId=&criteriaId=    -> list_responses
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(responses::list_responses).post(responses::upsert_response),
    )
}
