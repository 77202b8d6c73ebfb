use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn ocr_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/ocr", post(handlers::ocr))
        .with_state(state)
}
