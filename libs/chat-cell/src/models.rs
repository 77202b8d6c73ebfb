use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Data URL of an uploaded photo for vision analysis.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_nutrition: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("chat completion is not configured")]
    NotConfigured,

    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion API error: {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion response had no content")]
    MalformedResponse,
}
