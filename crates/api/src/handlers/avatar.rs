//! Handler for the streaming avatar session.

use axum::extract::State;
use axum::Json;
use gapply_ai::avatar::AvatarSession;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::OkResponse;
use crate::state::AppState;

/// POST /api/v1/avatar/session
///
/// Negotiate a session token with the avatar provider. Returns
/// `{ ok, token, baseUrl }`; the client connects to `baseUrl` with `token`.
pub async fn create_session(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<OkResponse<AvatarSession>>> {
    let session = state.providers.avatar.create_session().await?;
    tracing::info!(base_url = %session.base_url, "Avatar session created");
    Ok(Json(OkResponse::new(session)))
}
