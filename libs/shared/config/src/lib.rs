use std::env;
use tracing::warn;

/// Application configuration read from the environment at startup.
///
/// Credentials default to empty strings when unset; the `is_*_configured`
/// checks are what the handlers consult before attempting an upstream call.
/// Base URLs are overridable so tests can point the clients at a mock server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub groq_api_key: String,
    pub groq_base_url: String,
    pub elevenlabs_api_key: String,
    pub elevenlabs_voice_id: String,
    pub elevenlabs_base_url: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from_number: String,
    pub twilio_base_url: String,
    pub data_dir: String,
    pub tessdata_dir: String,
    /// How long the emergency doctor leg waits before dialing, so the user
    /// call can establish and open the conference first.
    pub doctor_leg_delay_ms: u64,
}

const DEFAULT_DOCTOR_LEG_DELAY_MS: u64 = 3000;

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_base_url: env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
            elevenlabs_api_key: optional_env("ELEVENLABS_API_KEY"),
            elevenlabs_voice_id: optional_env("ELEVENLABS_VOICE_ID"),
            elevenlabs_base_url: env::var("ELEVENLABS_BASE_URL")
                .unwrap_or_else(|_| "https://api.elevenlabs.io/v1".to_string()),
            twilio_account_sid: optional_env("TWILIO_ACCOUNT_SID"),
            twilio_auth_token: optional_env("TWILIO_AUTH_TOKEN"),
            twilio_from_number: optional_env("TWILIO_FROM_NUMBER"),
            twilio_base_url: env::var("TWILIO_BASE_URL")
                .unwrap_or_else(|_| "https://api.twilio.com".to_string()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            tessdata_dir: env::var("TESSDATA_DIR").unwrap_or_else(|_| "tessdata".to_string()),
            doctor_leg_delay_ms: env::var("DOCTOR_LEG_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DOCTOR_LEG_DELAY_MS),
        }
    }

    /// Baseline config with no credentials and conventional defaults.
    /// Every capability check reports unconfigured. Tests start from this
    /// and fill in what they exercise.
    pub fn unconfigured() -> Self {
        Self {
            groq_api_key: String::new(),
            groq_base_url: "https://api.groq.com/openai/v1".to_string(),
            elevenlabs_api_key: String::new(),
            elevenlabs_voice_id: String::new(),
            elevenlabs_base_url: "https://api.elevenlabs.io/v1".to_string(),
            twilio_account_sid: String::new(),
            twilio_auth_token: String::new(),
            twilio_from_number: String::new(),
            twilio_base_url: "https://api.twilio.com".to_string(),
            data_dir: "data".to_string(),
            tessdata_dir: "tessdata".to_string(),
            doctor_leg_delay_ms: DEFAULT_DOCTOR_LEG_DELAY_MS,
        }
    }

    /// Chat completion requires the provider API key.
    pub fn is_chat_configured(&self) -> bool {
        !self.groq_api_key.is_empty()
    }

    /// Speech synthesis requires both the API key and a voice identifier.
    pub fn is_speech_configured(&self) -> bool {
        !self.elevenlabs_api_key.is_empty() && !self.elevenlabs_voice_id.is_empty()
    }

    /// Telephony requires account sid, auth token and a from-number.
    pub fn is_telephony_configured(&self) -> bool {
        !self.twilio_account_sid.is_empty()
            && !self.twilio_auth_token.is_empty()
            && !self.twilio_from_number.is_empty()
    }
}

fn optional_env(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        warn!("{} not set, running degraded for this capability", name);
        String::new()
    })
}
