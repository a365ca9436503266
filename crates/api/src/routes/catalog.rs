//! Route definitions for the read-only catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes merged at the API root.
///
/// ```text
/// GET /packs             -> list_packs
/// GET /criteria?pack=    -> list_criteria
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/packs", get(catalog::list_packs))
        .route("/criteria", get(catalog::list_criteria))
}
