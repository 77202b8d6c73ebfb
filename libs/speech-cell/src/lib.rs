pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{TtsRequest, TtsResponse};
pub use services::SpeechClient;
