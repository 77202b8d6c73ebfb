pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{OcrRequest, OcrResponse};
pub use services::{FixedTextEngine, OcrEngine};
