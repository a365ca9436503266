pub mod actions;
pub mod assessments;
pub mod assistant;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod programs;
pub mod responses;
pub mod results;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      demo login (public)
///
/// /packs                                           list criteria packs
/// /criteria?pack=                                  criteria catalog for a pack
///
/// /assessments                                     create (POST)
/// /assessments/{id}                                get
/// /assessments/{id}/onboarding                     save onboarding data (PUT)
///
/// /responses                                       upsert (POST), list (GET ?assessmentId=&criteriaId=)
///
/// /actions/status                                  set action status (POST)
/// /actions/validate-impact                         validate action impact (POST)
///
/// /results?assessmentId=                           computed results with program quadrants
///
/// /programs/activate                               activate a program (POST)
/// /programs/close                                  close a program instance (POST)
/// /programs/execution?assessmentId=                instances with action progress
///
/// /chat                                            assistant reply (POST)
/// /chat/messages?assessmentId=                     stored conversation
/// /speech/transcribe                               speech-to-text (POST multipart)
/// /speech/synthesize                               text-to-speech (POST, audio bytes)
/// /avatar/session                                  avatar session token (POST)
/// ```
///
/// Everything except `/auth/login` requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(catalog::router())
        .nest("/assessments", assessments::router())
        .nest("/responses", responses::router())
        .nest("/actions", actions::router())
        .nest("/results", results::router())
        .nest("/programs", programs::router())
        .merge(assistant::router())
}
