use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmergencyCallRequest {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Error, Debug)]
pub enum TelephonyError {
    #[error("telephony is not configured")]
    NotConfigured,

    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("telephony API error: {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}
