//! Handlers for speech-to-text and text-to-speech.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use gapply_ai::speech::{AudioUpload, DEFAULT_AUDIO_CONTENT_TYPE, MAX_TTS_CHARS};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::AppJson;
use crate::response::OkResponse;
use crate::state::AppState;

/// Largest accepted recording (the transcription API's own limit).
pub const MAX_AUDIO_BYTES: usize = 25 * 1024 * 1024;

const DEFAULT_AUDIO_FILE_NAME: &str = "audio.webm";

#[derive(Debug, Serialize)]
pub struct TranscriptPayload {
    pub text: String,
}

/// Request body for `POST /speech/synthesize`.
#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    pub text: Option<String>,
    pub voice: Option<String>,
}

/// POST /api/v1/speech/transcribe
///
/// Accepts a multipart form with a required `audio` field (`file` is accepted
/// as an alias) and returns the transcript.
pub async fn transcribe(
    State(state): State<AppState>,
    _user: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<OkResponse<TranscriptPayload>>> {
    let mut multipart = multipart?;
    let mut upload: Option<AudioUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "audio" | "file" => {
                let file_name = field
                    .file_name()
                    .unwrap_or(DEFAULT_AUDIO_FILE_NAME)
                    .to_string();
                let content_type = field.content_type().map(str::to_owned);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                upload = Some(AudioUpload {
                    data: data.to_vec(),
                    file_name,
                    content_type,
                });
            }
            _ => {} // ignore unknown fields
        }
    }

    let upload =
        upload.ok_or_else(|| AppError::BadRequest("Missing required 'audio' field".into()))?;
    if upload.data.is_empty() {
        return Err(AppError::BadRequest("Audio upload is empty".into()));
    }

    tracing::debug!(bytes = upload.data.len(), "Transcribing audio");
    let text = state.providers.speech.transcribe(upload).await?;

    Ok(Json(OkResponse::new(TranscriptPayload { text })))
}

/// POST /api/v1/speech/synthesize
///
/// Returns the provider's audio bytes with its content type.
pub async fn synthesize(
    State(state): State<AppState>,
    _user: AuthUser,
    AppJson(input): AppJson<SynthesizeRequest>,
) -> AppResult<Response> {
    let text = input.text.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(AppError::BadRequest("text is required".into()));
    }
    if text.chars().count() > MAX_TTS_CHARS {
        return Err(AppError::BadRequest(format!(
            "text must be at most {MAX_TTS_CHARS} characters"
        )));
    }
    let voice = input.voice.as_deref().map(str::trim).filter(|v| !v.is_empty());

    let audio = state.providers.speech.synthesize(text, voice).await?;

    let content_type = HeaderValue::from_str(&audio.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_AUDIO_CONTENT_TYPE));

    Ok(([(header::CONTENT_TYPE, content_type)], audio.data).into_response())
}
