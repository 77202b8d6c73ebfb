use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, warn};

use shared_config::AppConfig;

use crate::models::Doctor;

const CSV_FILE: &str = "doctors.csv";
const SAMPLE_FILE: &str = "doctors.sample.json";

/// Loads the doctor directory from the data directory on every call.
///
/// Source chain: `doctors.csv`, then `doctors.sample.json`, then empty.
/// Loading never fails upward — an unreadable source degrades to the next
/// one. Field names are matched case-insensitively and numeric fields
/// coerce to zero on garbage, so a hand-edited sheet cannot take the
/// finder down.
pub struct DoctorDirectory {
    data_dir: PathBuf,
}

impl DoctorDirectory {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            data_dir: PathBuf::from(&config.data_dir),
        }
    }

    pub fn with_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn load(&self) -> Vec<Doctor> {
        let csv_path = self.data_dir.join(CSV_FILE);
        if csv_path.exists() {
            match load_csv(&csv_path) {
                Ok(doctors) => {
                    debug!("loaded {} doctors from {}", doctors.len(), csv_path.display());
                    return doctors;
                }
                Err(e) => {
                    warn!("failed to read {}: {}, trying sample fallback", csv_path.display(), e);
                }
            }
        }

        let sample_path = self.data_dir.join(SAMPLE_FILE);
        if sample_path.exists() {
            match load_json(&sample_path) {
                Ok(doctors) => {
                    debug!("loaded {} doctors from {}", doctors.len(), sample_path.display());
                    return doctors;
                }
                Err(e) => {
                    warn!("failed to read {}: {}", sample_path.display(), e);
                }
            }
        }

        Vec::new()
    }
}

fn load_csv(path: &Path) -> Result<Vec<Doctor>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();

    let mut doctors = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |name: &str| -> Option<&str> {
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| record.get(i))
        };

        doctors.push(normalize(
            field("name").unwrap_or_default().to_string(),
            field("specialization").unwrap_or_default().to_string(),
            coerce_number(field("experience")),
            coerce_number(field("rating")),
            field("email").unwrap_or_default().to_string(),
            field("phone").unwrap_or_default().to_string(),
            coerce_coordinate(field("lat")),
            coerce_coordinate(field("long")),
        ));
    }

    Ok(doctors)
}

fn load_json(path: &Path) -> Result<Vec<Doctor>> {
    let raw = std::fs::read_to_string(path)?;
    let rows: Vec<Value> = serde_json::from_str(&raw)?;

    Ok(rows
        .iter()
        .filter_map(Value::as_object)
        .map(|row| {
            let field = |name: &str| -> Option<&Value> {
                row.iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            };

            normalize(
                json_text(field("name")),
                json_text(field("specialization")),
                json_number(field("experience")),
                json_number(field("rating")),
                json_text(field("email")),
                json_text(field("phone")),
                json_coordinate(field("lat")),
                json_coordinate(field("long")),
            )
        })
        .collect())
}

#[allow(clippy::too_many_arguments)]
fn normalize(
    name: String,
    specialization: String,
    experience: f64,
    rating: f64,
    email: String,
    phone: String,
    lat: Option<f64>,
    long: Option<f64>,
) -> Doctor {
    // Half-specified coordinate pairs carry no usable location.
    let (lat, long) = match (lat, long) {
        (Some(lat), Some(long)) => (Some(lat), Some(long)),
        _ => (None, None),
    };

    Doctor {
        name,
        specialization,
        experience: experience.max(0.0) as u32,
        rating,
        email,
        phone,
        lat,
        long,
    }
}

/// Non-finite values ("NaN", "inf") parse successfully but would poison
/// every score comparison downstream; they coerce to zero like garbage.
fn coerce_number(raw: Option<&str>) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// A missing, unparseable, non-finite, or exactly-zero coordinate means "no
/// location recorded" in the backing store.
fn coerce_coordinate(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v != 0.0)
}

fn json_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn json_number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn json_coordinate(value: Option<&Value>) -> Option<f64> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite() && *v != 0.0)
}
