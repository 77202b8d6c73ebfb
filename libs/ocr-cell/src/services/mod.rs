pub mod engine;

pub use engine::{FixedTextEngine, OcrEngine};
