use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Handler-boundary error type. The payload carries a short machine-readable
/// code (`phone_required`, `finder_failed`, ...) and, for server errors, a
/// debug detail string.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error: {code}: {detail}")]
    Internal { code: String, detail: String },
}

impl AppError {
    pub fn bad_request(code: impl Into<String>) -> Self {
        AppError::BadRequest(code.into())
    }

    pub fn internal(code: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::Internal {
            code: code.into(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadRequest(code) => (StatusCode::BAD_REQUEST, json!({ "error": code })),
            AppError::Internal { code, detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": code, "detail": detail }),
            ),
        };

        tracing::error!("Error: {}: {}", status, self);

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::bad_request("phone_required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_500() {
        let response = AppError::internal("finder_failed", "boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
