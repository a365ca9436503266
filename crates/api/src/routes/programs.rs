//! Route definitions for the `/programs` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::programs;
use crate::state::AppState;

/// Routes mounted at `/programs`.
///
/// ```text
/// POST /activate                  -> activate_program
/// POST /close                     -> close_program
/// GET  /execution?assessmentId=   -> execution
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activate", post(programs::activate_program))
        .route("/close", post(programs::close_program))
        .route("/execution", get(programs::execution))
}
