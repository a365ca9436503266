//! Route definitions for the `/results` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::results;
use crate::state::AppState;

/// Routes mounted at `/results`.
///
/// ```text
/// GET /?assessmentId=    -> get_results
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(results::get_results))
}
