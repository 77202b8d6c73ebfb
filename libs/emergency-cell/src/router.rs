use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn emergency_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/emergency-call", post(handlers::emergency_call))
        .with_state(state)
}
