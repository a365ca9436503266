//! Streaming video-avatar session negotiation.
//!
//! The avatar vendor has moved its token endpoint between hosts and path
//! spellings, so the client walks every configured `(base URL, path)` pair
//! in order and returns the first token it gets.

use serde::Serialize;

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::normalize::extract_avatar_token;

const PROVIDER: &str = "avatar";

/// A negotiated session token and the host that issued it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarSession {
    pub token: String,
    pub base_url: String,
}

/// One endpoint to try.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub base_url: String,
    pub url: String,
}

/// Every base URL combined with every path, base URLs outermost.
pub fn candidates(base_urls: &[String], paths: &[String]) -> Vec<Candidate> {
    base_urls
        .iter()
        .flat_map(|base| {
            paths.iter().map(move |path| Candidate {
                base_url: base.clone(),
                url: format!("{base}/{}", path.trim_start_matches('/')),
            })
        })
        .collect()
}

pub struct AvatarClient {
    client: reqwest::Client,
    api_key: Option<String>,
    candidates: Vec<Candidate>,
}

impl AvatarClient {
    pub fn with_client(client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            client,
            api_key: config.avatar_api_key.clone(),
            candidates: candidates(&config.avatar_base_urls, &config.avatar_paths),
        }
    }

    /// Request a streaming token, trying each candidate endpoint in turn.
    ///
    /// Returns the last failure when no endpoint succeeds.
    pub async fn create_session(&self) -> Result<AvatarSession, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingConfig("AVATAR_API_KEY"))?;

        let mut last_err = ProviderError::MissingConfig("AVATAR_BASE_URLS");

        for candidate in &self.candidates {
            match self.try_candidate(api_key, candidate).await {
                Ok(token) => {
                    tracing::debug!(url = %candidate.url, "Avatar session negotiated");
                    return Ok(AvatarSession {
                        token,
                        base_url: candidate.base_url.clone(),
                    });
                }
                Err(e) => {
                    tracing::warn!(url = %candidate.url, error = %e, "Avatar endpoint failed, trying next");
                    last_err = e;
                }
            }
        }

        Err(last_err)
    }

    async fn try_candidate(
        &self,
        api_key: &str,
        candidate: &Candidate,
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&candidate.url)
            .header("x-api-key", api_key)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(ProviderError::request(PROVIDER))?;

        if !response.status().is_success() {
            return Err(ProviderError::from_response(PROVIDER, response).await);
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(ProviderError::request(PROVIDER))?;

        extract_avatar_token(&body).ok_or_else(|| ProviderError::InvalidResponse {
            provider: PROVIDER,
            detail: "no token in session response".into(),
        })
    }
}
