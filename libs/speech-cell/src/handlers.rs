use std::sync::Arc;

use axum::{extract::State, Json};
use base64::{engine::general_purpose, Engine as _};
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{TtsRequest, TtsResponse};
use crate::services::elevenlabs::SpeechClient;

#[axum::debug_handler]
pub async fn tts(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<TtsRequest>,
) -> Result<Json<TtsResponse>, AppError> {
    let text = request.text.unwrap_or_default();
    if text.is_empty() {
        return Err(AppError::bad_request("text_required"));
    }
    debug!("tts request, {} chars", text.len());

    let client = match SpeechClient::new(&state) {
        Ok(client) => client,
        Err(_) => return Ok(Json(TtsResponse::degraded("no-credentials"))),
    };

    // A failed upstream call degrades exactly like missing credentials: the
    // caller gets a null payload and falls back to on-device speech.
    match client.synthesize(&text).await {
        Ok(audio) => Ok(Json(TtsResponse::audio(
            general_purpose::STANDARD.encode(audio),
        ))),
        Err(e) => {
            warn!("speech synthesis failed, returning null audio: {}", e);
            Ok(Json(TtsResponse::degraded("synthesis_failed")))
        }
    }
}
