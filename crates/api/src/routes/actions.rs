//! Route definitions for the `/actions` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::actions;
use crate::state::AppState;

/// Routes mounted at `/actions`.
///
/// ```text
/// POST /status            -> set_status
/// POST /validate-impact   -> validate_impact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", post(actions::set_status))
        .route("/validate-impact", post(actions::validate_impact))
}
