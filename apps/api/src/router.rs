use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use chat_cell::router::chat_routes;
use doctor_cell::router::doctor_routes;
use emergency_cell::router::emergency_routes;
use ocr_cell::router::ocr_routes;
use shared_config::AppConfig;
use speech_cell::router::speech_routes;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    let api = Router::new()
        .route("/ping", get(ping))
        .merge(chat_routes(state.clone()))
        .merge(doctor_routes(state.clone()))
        .merge(emergency_routes(state.clone()))
        .merge(speech_routes(state.clone()))
        .merge(ocr_routes(state));

    Router::new()
        .route("/", get(|| async { "Health assistant API is running!" }))
        .nest("/api", api)
}

async fn ping() -> Json<Value> {
    let message = std::env::var("PING_MESSAGE").unwrap_or_else(|_| "ping".to_string());
    Json(json!({ "message": message }))
}
