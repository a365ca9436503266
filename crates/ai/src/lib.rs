//! Clients for the third-party services behind the assessment assistant.
//!
//! - [`chat`] -- LLM chat completion.
//! - [`speech`] -- speech-to-text and text-to-speech.
//! - [`avatar`] -- streaming video-avatar session negotiation.
//!
//! Providers answer in slightly different JSON shapes depending on version
//! and vendor; [`normalize`] reduces them to the few fields the service
//! returns. Every call is a single round trip: failures are reported, never
//! retried.

pub mod avatar;
pub mod chat;
pub mod config;
pub mod error;
pub mod normalize;
pub mod speech;

use std::sync::Arc;

pub use config::ProviderConfig;
pub use error::ProviderError;

/// All provider clients, sharing one connection pool.
#[derive(Clone)]
pub struct Providers {
    pub chat: Arc<chat::ChatClient>,
    pub speech: Arc<speech::SpeechClient>,
    pub avatar: Arc<avatar::AvatarClient>,
}

impl Providers {
    pub fn from_config(config: &ProviderConfig) -> Self {
        let http = reqwest::Client::new();
        Self {
            chat: Arc::new(chat::ChatClient::with_client(http.clone(), config)),
            speech: Arc::new(speech::SpeechClient::with_client(http.clone(), config)),
            avatar: Arc::new(avatar::AvatarClient::with_client(http, config)),
        }
    }
}
