use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use doctor_cell::RankingService;
use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::EmergencyCallRequest;
use crate::services::twilio::{self, TelephonyClient};

const UNCONFIGURED_MESSAGE: &str = "Emergency acknowledged. Telephony is not configured. Please dial emergency services or contact a nearby doctor immediately.";
const NO_DOCTOR_MESSAGE: &str =
    "No doctor available for emergency call. Please dial emergency services immediately.";
const CALLS_INITIATED_MESSAGE: &str =
    "Emergency calls initiated. Connecting you to the doctor.";

#[axum::debug_handler]
pub async fn emergency_call(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<EmergencyCallRequest>,
) -> Result<Json<Value>, AppError> {
    let phone = request.phone.unwrap_or_default();
    if phone.is_empty() {
        return Err(AppError::bad_request("phone_required"));
    }
    let description = request.description.unwrap_or_default();
    info!("emergency call requested, description {} chars", description.len());

    // Best match for the reported emergency becomes the doctor leg.
    let ranking = RankingService::new(&state);
    let query = description.clone();
    let top = tokio::task::spawn_blocking(move || ranking.top_doctor(&query))
        .await
        .map_err(|e| AppError::internal("emergency_failed", e.to_string()))?;

    let client = match TelephonyClient::new(&state) {
        Ok(client) => client,
        Err(_) => {
            warn!("telephony not configured, acknowledging without calls");
            return Ok(Json(json!({
                "message": UNCONFIGURED_MESSAGE,
                "doctor": top,
            })));
        }
    };

    let Some(doctor) = top.filter(|d| !d.phone.is_empty()) else {
        warn!("no doctor available for emergency call");
        return Ok(Json(json!({
            "message": NO_DOCTOR_MESSAGE,
            "doctor": null,
        })));
    };

    let conference_id = twilio::conference_id();
    let user_twiml = twilio::user_twiml(&doctor.name, &conference_id);

    // The user leg must succeed for the response to be a success; it opens
    // the conference.
    let user_call = client
        .place_call(&phone, &user_twiml)
        .await
        .map_err(|e| AppError::internal("user_call_failed", e.to_string()))?;
    info!("user leg initiated to {}", phone);

    // Doctor leg joins the same conference after the user call has had a
    // moment to establish. Fire-and-forget: by the time it runs the response
    // below is already on the wire, so its failure can only be logged.
    let doctor_twiml = twilio::doctor_twiml(
        (!description.is_empty()).then_some(description.as_str()),
        &conference_id,
    );
    let doctor_phone = doctor.phone.clone();
    let delay = Duration::from_millis(state.doctor_leg_delay_ms);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        match client.place_call(&doctor_phone, &doctor_twiml).await {
            Ok(_) => info!("doctor leg initiated to {}", doctor_phone),
            Err(e) => error!("doctor leg failed: {}", e),
        }
    });

    Ok(Json(json!({
        "message": CALLS_INITIATED_MESSAGE,
        "doctor": doctor,
        "userCall": user_call,
        "conferenceId": conference_id,
    })))
}
