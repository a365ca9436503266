//! Route definitions for the assistant proxy endpoints.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{avatar, chat, speech};
use crate::state::AppState;

/// Routes merged at the API root.
///
/// ```text
/// POST /chat                 -> chat::send_message
/// GET  /chat/messages        -> chat::list_messages
/// POST /speech/transcribe    -> speech::transcribe (multipart, `audio` field)
/// POST /speech/synthesize    -> speech::synthesize
/// POST /avatar/session       -> avatar::create_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::send_message))
        .route("/chat/messages", get(chat::list_messages))
        .route(
            "/speech/transcribe",
            post(speech::transcribe).layer(DefaultBodyLimit::max(speech::MAX_AUDIO_BYTES)),
        )
        .route("/speech/synthesize", post(speech::synthesize))
        .route("/avatar/session", post(avatar::create_session))
}
