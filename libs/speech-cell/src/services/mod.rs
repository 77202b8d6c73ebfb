pub mod elevenlabs;

pub use elevenlabs::SpeechClient;
