use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use shared_config::AppConfig;

use crate::models::SpeechError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Text-to-speech client for an ElevenLabs-style API.
///
/// The streaming endpoint is tried first, then the plain one; some voices
/// are only reachable through one of the two.
pub struct SpeechClient {
    client: Client,
    api_key: String,
    voice_id: String,
    base_url: String,
}

impl SpeechClient {
    pub fn new(config: &AppConfig) -> Result<Self, SpeechError> {
        if !config.is_speech_configured() {
            return Err(SpeechError::NotConfigured);
        }

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key: config.elevenlabs_api_key.clone(),
            voice_id: config.elevenlabs_voice_id.clone(),
            base_url: config.elevenlabs_base_url.clone(),
        })
    }

    /// Synthesize `text` to audio bytes (mpeg).
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let endpoints = [
            format!("{}/text-to-speech/{}/stream", self.base_url, self.voice_id),
            format!("{}/text-to-speech/{}", self.base_url, self.voice_id),
        ];

        let mut last_error = SpeechError::NotConfigured;
        for url in endpoints {
            debug!("trying synthesis endpoint {}", url);
            match self.request(&url, text).await {
                Ok(audio) => {
                    debug!("received {} audio bytes", audio.len());
                    return Ok(audio);
                }
                Err(e) => {
                    warn!("synthesis endpoint {} failed: {}", url, e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    async fn request(&self, url: &str, text: &str) -> Result<Vec<u8>, SpeechError> {
        let response = self
            .client
            .post(url)
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&json!({
                "text": text,
                "voice_settings": { "stability": 0.5, "similarity_boost": 0.5 },
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Api { status, body });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
