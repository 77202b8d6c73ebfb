use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn speech_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/tts", post(handlers::tts))
        .with_state(state)
}
