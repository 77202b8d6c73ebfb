use std::cmp::Ordering;

use tracing::debug;

use shared_config::AppConfig;

use crate::models::{Doctor, GeoPoint};
use crate::services::directory::DoctorDirectory;
use crate::services::scoring::heuristic_score;

pub const MAX_RESULTS: usize = 12;

/// Ranks the doctor directory against a query. Stateless between requests:
/// the directory is re-read on every call.
pub struct RankingService {
    directory: DoctorDirectory,
}

impl RankingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            directory: DoctorDirectory::new(config),
        }
    }

    pub fn with_directory(directory: DoctorDirectory) -> Self {
        Self { directory }
    }

    /// Load, score and sort the directory, returning at most `MAX_RESULTS`
    /// doctors in non-increasing score order. The sort is stable, so equal
    /// scores keep the backing store's original order — that is the
    /// tie-break contract. An empty query is valid and ranks purely on
    /// rating, experience and proximity.
    pub fn find_doctors(&self, query: &str, coords: Option<&GeoPoint>) -> Vec<Doctor> {
        let doctors = self.directory.load();
        debug!("ranking {} doctors for query ({} chars)", doctors.len(), query.len());

        let mut scored: Vec<(f64, Doctor)> = doctors
            .into_iter()
            .map(|doctor| (heuristic_score(query, &doctor, coords), doctor))
            .collect();

        // The loader zeroes non-finite numerics and request coordinates
        // arrive as JSON (which cannot express NaN), so scores are finite
        // and the comparison cannot hit NaN.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored.truncate(MAX_RESULTS);

        scored.into_iter().map(|(_, doctor)| doctor).collect()
    }

    /// Best single match for a query, if the directory has anyone at all.
    pub fn top_doctor(&self, query: &str) -> Option<Doctor> {
        self.find_doctors(query, None).into_iter().next()
    }
}
