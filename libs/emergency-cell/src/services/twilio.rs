use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use shared_config::AppConfig;

use crate::models::TelephonyError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// How much of the patient's description is read to the doctor.
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Outbound-call client for a Twilio-style REST API.
pub struct TelephonyClient {
    client: Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
    base_url: String,
}

impl TelephonyClient {
    pub fn new(config: &AppConfig) -> Result<Self, TelephonyError> {
        if !config.is_telephony_configured() {
            return Err(TelephonyError::NotConfigured);
        }

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            account_sid: config.twilio_account_sid.clone(),
            auth_token: config.twilio_auth_token.clone(),
            from_number: config.twilio_from_number.clone(),
            base_url: config.twilio_base_url.clone(),
        })
    }

    /// Initiate a call to `to` executing the given TwiML. Returns the raw
    /// provider response body on success.
    pub async fn place_call(&self, to: &str, twiml: &str) -> Result<String, TelephonyError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Calls.json",
            self.base_url, self.account_sid
        );
        debug!("placing call via {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("From", self.from_number.as_str()),
                ("To", to),
                ("Twiml", twiml),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(TelephonyError::Api { status, body });
        }

        Ok(body)
    }
}

/// Shared token that merges the two independently placed calls into one
/// two-party conversation.
pub fn conference_id() -> String {
    format!("emergency-{}", chrono::Utc::now().timestamp_millis())
}

/// TwiML for the user leg: announce the doctor, then hold in the conference.
/// The user opens the conference and ends it by hanging up.
pub fn user_twiml(doctor_name: &str, conference_id: &str) -> String {
    format!(
        "<?xml version='1.0' encoding='UTF-8'?>\
         <Response>\
           <Say>Health Assistant Emergency Service. Connecting you to Dr. {}. Please hold while we connect the doctor.</Say>\
           <Dial>\
             <Conference startConferenceOnEnter=\"true\" endConferenceOnExit=\"true\">{}</Conference>\
           </Dial>\
         </Response>",
        xml_escape(doctor_name),
        xml_escape(conference_id),
    )
}

/// TwiML for the doctor leg: announce the emergency with a short description
/// preview, then join the waiting conference.
pub fn doctor_twiml(description: Option<&str>, conference_id: &str) -> String {
    let announcement = match description {
        Some(desc) => {
            let preview: String = desc.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!(
                "Health Assistant Emergency Call. A patient needs immediate medical assistance. Patient description: {}",
                preview
            )
        }
        None => "Health Assistant Emergency Call. A patient needs immediate medical assistance."
            .to_string(),
    };

    format!(
        "<?xml version='1.0' encoding='UTF-8'?>\
         <Response>\
           <Say>{}</Say>\
           <Dial>\
             <Conference startConferenceOnEnter=\"false\" endConferenceOnExit=\"true\">{}</Conference>\
           </Dial>\
         </Response>",
        xml_escape(&announcement),
        xml_escape(conference_id),
    )
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
