//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use gapply_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::demo::DEMO_ROLE;
use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::middleware::extract::AppJson;
use crate::response::OkResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub role: &'static str,
}

/// POST /api/v1/auth/login
///
/// Check the demo credentials and issue an access token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<OkResponse<LoginResponse>>> {
    if !state.config.demo.verify(&input.username, &input.password) {
        tracing::warn!(username = %input.username, "Rejected login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let username = input.username.trim().to_lowercase();
    let access_token = generate_access_token(&username, DEMO_ROLE, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = %username, "Demo user logged in");

    Ok(Json(OkResponse::new(LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            username,
            role: DEMO_ROLE,
        },
    })))
}
