/// Default OpenAI-compatible API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_STT_MODEL: &str = "whisper-1";
pub const DEFAULT_TTS_MODEL: &str = "tts-1";
pub const DEFAULT_TTS_VOICE: &str = "alloy";

/// Avatar API hosts tried in order until one accepts the session request.
pub const DEFAULT_AVATAR_BASE_URLS: &[&str] = &["https://api.heygen.com", "https://api.heygen.ai"];

/// Token endpoint paths tried against each avatar host.
pub const DEFAULT_AVATAR_PATHS: &[&str] = &["/v1/streaming.create_token", "/v1/streaming/create_token"];

/// Credentials and endpoints for the assistant providers.
///
/// API keys are optional at startup: a missing key only fails the request
/// that needs it.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub chat_model: String,
    pub stt_model: String,
    pub tts_model: String,
    pub tts_voice: String,
    pub avatar_api_key: Option<String>,
    pub avatar_base_urls: Vec<String>,
    pub avatar_paths: Vec<String>,
}

impl ProviderConfig {
    /// Load provider configuration from environment variables.
    ///
    /// | Env Var            | Default                                         |
    /// |--------------------|-------------------------------------------------|
    /// | `OPENAI_API_KEY`   | -- (chat and speech fail with `MissingConfig`)  |
    /// | `OPENAI_BASE_URL`  | `https://api.openai.com/v1`                     |
    /// | `CHAT_MODEL`       | `gpt-4o-mini`                                   |
    /// | `STT_MODEL`        | `whisper-1`                                     |
    /// | `TTS_MODEL`        | `tts-1`                                         |
    /// | `TTS_VOICE`        | `alloy`                                         |
    /// | `AVATAR_API_KEY`   | -- (avatar fails with `MissingConfig`)          |
    /// | `AVATAR_BASE_URLS` | `https://api.heygen.com,https://api.heygen.ai`  |
    /// | `AVATAR_PATHS`     | `/v1/streaming.create_token,/v1/streaming/create_token` |
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a closure).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let or_default = |var: &str, default: &str| non_empty(var).unwrap_or_else(|| default.to_string());
        let list = |var: &str, defaults: &[&str]| -> Vec<String> {
            match non_empty(var) {
                Some(raw) => split_list(&raw),
                None => defaults.iter().map(|s| s.to_string()).collect(),
            }
        };

        Self {
            openai_api_key: non_empty("OPENAI_API_KEY"),
            openai_base_url: trim_base_url(&or_default("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL)),
            chat_model: or_default("CHAT_MODEL", DEFAULT_CHAT_MODEL),
            stt_model: or_default("STT_MODEL", DEFAULT_STT_MODEL),
            tts_model: or_default("TTS_MODEL", DEFAULT_TTS_MODEL),
            tts_voice: or_default("TTS_VOICE", DEFAULT_TTS_VOICE),
            avatar_api_key: non_empty("AVATAR_API_KEY"),
            avatar_base_urls: list("AVATAR_BASE_URLS", DEFAULT_AVATAR_BASE_URLS)
                .iter()
                .map(|u| trim_base_url(u))
                .collect(),
            avatar_paths: list("AVATAR_PATHS", DEFAULT_AVATAR_PATHS),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_keys() {
        let config = ProviderConfig::default();
        assert!(config.openai_api_key.is_none());
        assert!(config.avatar_api_key.is_none());
        assert_eq!(config.openai_base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(config.avatar_base_urls.len(), 2);
        assert_eq!(config.avatar_paths.len(), 2);
    }

    #[test]
    fn overrides_and_trailing_slashes() {
        let config = ProviderConfig::from_lookup(|var| match var {
            "OPENAI_API_KEY" => Some("sk-test".into()),
            "OPENAI_BASE_URL" => Some("http://localhost:8080/v1/".into()),
            "AVATAR_BASE_URLS" => Some(" https://a.example/ , ,https://b.example".into()),
            "TTS_VOICE" => Some("  ".into()),
            _ => None,
        });
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai_base_url, "http://localhost:8080/v1");
        assert_eq!(
            config.avatar_base_urls,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert_eq!(config.tts_voice, DEFAULT_TTS_VOICE);
    }
}
