use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;

use crate::models::ChatError;

pub const TEXT_MODEL: &str = "llama-3.1-8b-instant";
pub const VISION_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

const SYSTEM_PROMPT: &str = "You are a helpful medical assistant with image analysis capabilities. When analyzing medical images, provide concise, actionable guidance. Identify visible conditions, symptoms, or concerns. Always recommend consulting healthcare professionals for proper diagnosis. For voice chat, provide complete but concise responses (20-30 words). For text-only queries, give complete helpful answers in 25-35 words. Do NOT provide definitive diagnoses - only observations and recommendations.";

const NUTRITION_SYSTEM_PROMPT: &str = "You are a nutrition expert specializing in Indian diets and meal planning. Provide comprehensive, detailed meal plans with specific foods, portions, timing, and nutritional benefits. Include breakfast, lunch, dinner, and snacks. Consider Indian dietary preferences, regional foods, and health goals. Provide complete detailed responses with explanations.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const VOICE_REPLY_MAX_WORDS: usize = 40;

/// Chat/vision completion client for a Groq-style OpenAI-compatible API.
pub struct CompletionClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CompletionClient {
    pub fn new(config: &AppConfig) -> Result<Self, ChatError> {
        if !config.is_chat_configured() {
            return Err(ChatError::NotConfigured);
        }

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key: config.groq_api_key.clone(),
            base_url: config.groq_base_url.clone(),
        })
    }

    pub async fn complete(
        &self,
        message: &str,
        image: Option<&str>,
        is_nutrition: bool,
    ) -> Result<String, ChatError> {
        let system_prompt = if is_nutrition {
            NUTRITION_SYSTEM_PROMPT
        } else {
            SYSTEM_PROMPT
        };

        let user_message = match image {
            Some(data_url) => json!({
                "role": "user",
                "content": [
                    {
                        "type": "text",
                        "text": format!("Please analyze this medical image and respond to: {message}"),
                    },
                    {
                        "type": "image_url",
                        "image_url": { "url": data_url },
                    },
                ],
            }),
            None => json!({ "role": "user", "content": message }),
        };

        let max_tokens = if is_nutrition {
            800
        } else if image.is_some() {
            250
        } else {
            200
        };

        let body = json!({
            "model": if image.is_some() { VISION_MODEL } else { TEXT_MODEL },
            "messages": [
                { "role": "system", "content": system_prompt },
                user_message,
            ],
            "temperature": 0.2,
            "max_tokens": max_tokens,
        });

        let url = format!("{}/chat/completions", self.base_url);
        debug!("requesting completion from {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Api { status, body });
        }

        let data: Value = response.json().await?;
        data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or(ChatError::MalformedResponse)
    }
}

/// Voice replies are read aloud; keep them complete but under 40 words by
/// accumulating whole sentences. The first sentence is always kept.
pub fn trim_reply_for_voice(reply: &str) -> String {
    if reply.split_whitespace().count() <= VOICE_REPLY_MAX_WORDS {
        return reply.to_string();
    }

    let sentences: Vec<&str> = reply
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let Some(first) = sentences.first() else {
        return reply.to_string();
    };

    let mut result = first.to_string();
    for sentence in &sentences[1..] {
        let candidate = format!("{result}. {sentence}");
        if candidate.split_whitespace().count() <= VOICE_REPLY_MAX_WORDS {
            result = candidate;
        } else {
            break;
        }
    }

    if result.ends_with('.') {
        result
    } else {
        format!("{result}.")
    }
}
