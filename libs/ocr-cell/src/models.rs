use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OcrRequest {
    /// Data URL: `data:image/<fmt>;base64,<payload>`.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OcrResponse {
    pub text: String,
}

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("no OCR engine compiled in; rebuild with the `tesseract` feature")]
    EngineUnavailable,

    #[error("engine initialization failed: {0}")]
    Init(String),

    #[error("text recognition failed: {0}")]
    Recognition(String),
}
