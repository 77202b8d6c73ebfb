pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{ChatRequest, ChatResponse};
pub use services::CompletionClient;
