use serde::{Deserialize, Serialize};

/// One medical professional from the doctor directory.
///
/// Text fields default to empty when the source row omits them; numeric
/// fields default to zero. Coordinates are either both present or both
/// absent — the loader normalizes a half-specified pair to neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub specialization: String,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub rating: f64,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<f64>,
}

impl Doctor {
    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            long: self.long,
        }
    }
}

/// A latitude/longitude pair where either half may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
}

impl GeoPoint {
    pub fn new(lat: f64, long: f64) -> Self {
        Self {
            lat: Some(lat),
            long: Some(long),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FindDoctorsRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub coords: Option<GeoPoint>,
}
