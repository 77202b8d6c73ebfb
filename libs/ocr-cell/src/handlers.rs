use std::sync::Arc;

use axum::{extract::State, Json};
use base64::{engine::general_purpose, Engine as _};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{OcrRequest, OcrResponse};
use crate::services::engine;

static DATA_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^data:(image/\w+);base64,(.+)$").unwrap());

#[axum::debug_handler]
pub async fn ocr(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<OcrRequest>,
) -> Result<Json<OcrResponse>, AppError> {
    let image = request.image.unwrap_or_default();
    if image.is_empty() {
        return Err(AppError::bad_request("image_required"));
    }

    let captures = DATA_URL_RE
        .captures(&image)
        .ok_or_else(|| AppError::bad_request("invalid_image_data"))?;
    let payload = captures
        .get(2)
        .ok_or_else(|| AppError::bad_request("invalid_image_data"))?
        .as_str();
    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|_| AppError::bad_request("invalid_image_data"))?;
    debug!("ocr request, {} image bytes", bytes.len());

    // Unlike chat and speech there is no degraded payload to synthesize
    // here: a recognition problem is a server error.
    let shared = engine::shared_engine(&state)
        .await
        .map_err(|e| AppError::internal("ocr_failed", e.to_string()))?;
    let text = engine::run_recognition(shared, bytes)
        .await
        .map_err(|e| AppError::internal("ocr_failed", e.to_string()))?;

    Ok(Json(OcrResponse { text }))
}
