use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{ChatRequest, ChatResponse};
use crate::services::completion::{trim_reply_for_voice, CompletionClient};
use crate::services::fallback::fallback_reply;

#[axum::debug_handler]
pub async fn chat(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = request.message.unwrap_or_default();
    let image = request.image.as_deref().filter(|i| !i.is_empty());
    let is_nutrition = request.is_nutrition.unwrap_or(false);
    debug!(
        "chat request - message: {}, image: {}, nutrition: {}",
        !message.is_empty(),
        image.is_some(),
        is_nutrition
    );

    if message.is_empty() && image.is_none() {
        return Err(AppError::bad_request("message or image required"));
    }
    if image.is_some() && message.is_empty() {
        return Err(AppError::bad_request("message required when sending image"));
    }

    let client = match CompletionClient::new(&state) {
        Ok(client) => client,
        Err(_) => {
            return Ok(Json(ChatResponse {
                reply: fallback_reply(&message, is_nutrition).to_string(),
            }))
        }
    };

    // Upstream trouble never reaches the caller as an error; the reply just
    // degrades to the canned one.
    match client.complete(&message, image, is_nutrition).await {
        Ok(reply) => {
            let reply = if is_nutrition {
                reply
            } else {
                trim_reply_for_voice(&reply)
            };
            Ok(Json(ChatResponse { reply }))
        }
        Err(e) => {
            warn!("chat completion failed, serving canned reply: {}", e);
            Ok(Json(ChatResponse {
                reply: fallback_reply(&message, is_nutrition).to_string(),
            }))
        }
    }
}
