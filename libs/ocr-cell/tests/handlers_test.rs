use std::sync::Arc;

use axum::{extract::State, Json};

use ocr_cell::handlers;
use ocr_cell::models::OcrRequest;
use ocr_cell::services::engine::{run_recognition, FixedTextEngine};
use shared_config::AppConfig;
use shared_models::error::AppError;

fn request(image: Option<&str>) -> OcrRequest {
    OcrRequest {
        image: image.map(str::to_string),
    }
}

#[tokio::test]
async fn rejects_missing_image() {
    let state = Arc::new(AppConfig::unconfigured());
    let result = handlers::ocr(State(state), Json(request(None))).await;
    match result {
        Err(AppError::BadRequest(code)) => assert_eq!(code, "image_required"),
        other => panic!("expected bad request, got {other:?}"),
    }
}

#[tokio::test]
async fn rejects_non_data_url_payload() {
    let state = Arc::new(AppConfig::unconfigured());
    let result = handlers::ocr(State(state), Json(request(Some("not-a-data-url")))).await;
    match result {
        Err(AppError::BadRequest(code)) => assert_eq!(code, "invalid_image_data"),
        other => panic!("expected bad request, got {other:?}"),
    }
}

#[tokio::test]
async fn rejects_non_image_data_url() {
    let state = Arc::new(AppConfig::unconfigured());
    let result = handlers::ocr(
        State(state),
        Json(request(Some("data:text/plain;base64,aGVsbG8="))),
    )
    .await;
    match result {
        Err(AppError::BadRequest(code)) => assert_eq!(code, "invalid_image_data"),
        other => panic!("expected bad request, got {other:?}"),
    }
}

#[tokio::test]
async fn rejects_invalid_base64_payload() {
    let state = Arc::new(AppConfig::unconfigured());
    let result = handlers::ocr(
        State(state),
        Json(request(Some("data:image/png;base64,%%%%"))),
    )
    .await;
    match result {
        Err(AppError::BadRequest(code)) => assert_eq!(code, "invalid_image_data"),
        other => panic!("expected bad request, got {other:?}"),
    }
}

#[cfg(not(feature = "tesseract"))]
#[tokio::test]
async fn valid_image_without_engine_is_a_server_error() {
    use base64::{engine::general_purpose, Engine as _};

    let state = Arc::new(AppConfig::unconfigured());
    let payload = general_purpose::STANDARD.encode(b"fake-png-bytes");
    let result = handlers::ocr(
        State(state),
        Json(request(Some(&format!("data:image/png;base64,{payload}")))),
    )
    .await;
    match result {
        Err(AppError::Internal { code, .. }) => assert_eq!(code, "ocr_failed"),
        other => panic!("expected internal error, got {other:?}"),
    }
}

#[tokio::test]
async fn recognition_output_is_trimmed() {
    let engine = Arc::new(FixedTextEngine::new("  Take 2 tablets daily \n"));
    let text = run_recognition(engine, b"image".to_vec()).await.unwrap();
    assert_eq!(text, "Take 2 tablets daily");
}
