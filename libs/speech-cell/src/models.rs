use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// `audio_base64` is null when synthesis is degraded; the client then falls
/// back to on-device speech. `debug` says which degraded path was taken.
#[derive(Debug, Clone, Serialize)]
pub struct TtsResponse {
    #[serde(rename = "audioBase64")]
    pub audio_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl TtsResponse {
    pub fn audio(audio_base64: String) -> Self {
        Self {
            audio_base64: Some(audio_base64),
            debug: None,
        }
    }

    pub fn degraded(marker: &str) -> Self {
        Self {
            audio_base64: None,
            debug: Some(marker.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("speech synthesis is not configured")]
    NotConfigured,

    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("synthesis API error: {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}
