//! Speech-to-text and text-to-speech against an OpenAI-compatible audio API.

use serde::Serialize;

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::normalize::extract_transcript;

const STT_PROVIDER: &str = "speech-to-text";
const TTS_PROVIDER: &str = "text-to-speech";

/// Content type assumed when the TTS provider does not send one.
pub const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Longest text accepted for synthesis (provider limit).
pub const MAX_TTS_CHARS: usize = 4096;

/// An uploaded recording to transcribe.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub data: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
}

/// Raw audio returned by the TTS provider.
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub data: Vec<u8>,
    pub content_type: String,
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
}

pub struct SpeechClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    stt_model: String,
    tts_model: String,
    default_voice: String,
}

impl SpeechClient {
    pub fn with_client(client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            client,
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.clone(),
            stt_model: config.stt_model.clone(),
            tts_model: config.tts_model.clone(),
            default_voice: config.tts_voice.clone(),
        }
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .ok_or(ProviderError::MissingConfig("OPENAI_API_KEY"))
    }

    /// Upload a recording as multipart form data and return its transcript.
    pub async fn transcribe(&self, audio: AudioUpload) -> Result<String, ProviderError> {
        let api_key = self.api_key()?;

        let mut part =
            reqwest::multipart::Part::bytes(audio.data).file_name(audio.file_name);
        if let Some(mime) = audio.content_type.as_deref() {
            part = part
                .mime_str(mime)
                .map_err(ProviderError::request(STT_PROVIDER))?;
        }
        let form = reqwest::multipart::Form::new()
            .text("model", self.stt_model.clone())
            .part("file", part);

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await
            .map_err(ProviderError::request(STT_PROVIDER))?;

        if !response.status().is_success() {
            return Err(ProviderError::from_response(STT_PROVIDER, response).await);
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(ProviderError::request(STT_PROVIDER))?;

        // An empty transcript is a valid answer for a silent recording.
        Ok(extract_transcript(&body).unwrap_or_default())
    }

    /// Synthesize `text` and return the provider's audio bytes.
    pub async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesizedAudio, ProviderError> {
        let api_key = self.api_key()?;

        let response = self
            .client
            .post(format!("{}/audio/speech", self.base_url))
            .bearer_auth(api_key)
            .json(&SpeechRequest {
                model: &self.tts_model,
                voice: voice.unwrap_or(&self.default_voice),
                input: text,
            })
            .send()
            .await
            .map_err(ProviderError::request(TTS_PROVIDER))?;

        if !response.status().is_success() {
            return Err(ProviderError::from_response(TTS_PROVIDER, response).await);
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE)
            .to_string();
        let data = response
            .bytes()
            .await
            .map_err(ProviderError::request(TTS_PROVIDER))?
            .to_vec();

        if data.is_empty() {
            return Err(ProviderError::InvalidResponse {
                provider: TTS_PROVIDER,
                detail: "empty audio body".into(),
            });
        }

        Ok(SynthesizedAudio { data, content_type })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn client() -> SpeechClient {
        SpeechClient::with_client(reqwest::Client::new(), &ProviderConfig::default())
    }

    #[tokio::test]
    async fn transcribe_requires_key() {
        let upload = AudioUpload {
            data: b"RIFF".to_vec(),
            file_name: "clip.webm".into(),
            content_type: Some("audio/webm".into()),
        };
        let err = client().transcribe(upload).await.unwrap_err();
        assert_matches!(err, ProviderError::MissingConfig("OPENAI_API_KEY"));
    }

    #[tokio::test]
    async fn synthesize_requires_key() {
        let err = client().synthesize("hello", None).await.unwrap_err();
        assert_matches!(err, ProviderError::MissingConfig(_));
    }
}
