use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::FindDoctorsRequest;
use crate::services::ranking::RankingService;

#[axum::debug_handler]
pub async fn find_doctors(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<FindDoctorsRequest>,
) -> Result<Json<Value>, AppError> {
    let query = request.query.unwrap_or_default();
    let coords = request.coords;
    let service = RankingService::new(&state);

    // File reads and scoring run off the async workers; a panic in there
    // comes back as a join error instead of tearing down the connection.
    let ranked = tokio::task::spawn_blocking(move || service.find_doctors(&query, coords.as_ref()))
        .await
        .map_err(|e| AppError::internal("finder_failed", e.to_string()))?;

    Ok(Json(json!({ "doctors": ranked })))
}
