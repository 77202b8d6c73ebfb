pub mod completion;
pub mod fallback;

pub use completion::CompletionClient;
pub use fallback::fallback_reply;
