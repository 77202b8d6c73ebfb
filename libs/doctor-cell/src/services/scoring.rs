use crate::models::{Doctor, GeoPoint};
use crate::services::geo;

const RATING_WEIGHT: f64 = 1.5;
const EXPERIENCE_WEIGHT: f64 = 0.2;
const PROXIMITY_RADIUS_KM: f64 = 10.0;

/// (query keywords, specialization fragments, bonus)
const SPECIALIZATION_RULES: &[(&[&str], &[&str], f64)] = &[
    (&["heart", "chest"], &["cardio"], 5.0),
    (&["skin", "rash"], &["derma"], 5.0),
    (&["fever", "cold", "cough"], &["general", "physician"], 4.0),
    (&["diabet"], &["endocr"], 5.0),
    (&["pregnan", "gyn"], &["gyn"], 5.0),
];

/// Composite relevance of a doctor for a free-text symptom query.
///
/// Pure and total: defined for any query and any record, including all-zero
/// ones. Case-insensitive substring matching; the rules are independent and
/// additive, so a query spanning two concerns collects both bonuses. The
/// proximity bonus peaks at 10 for co-located points and fades to zero at
/// 10 km; an unknown distance contributes nothing.
pub fn heuristic_score(query: &str, doctor: &Doctor, user: Option<&GeoPoint>) -> f64 {
    let q = query.to_lowercase();
    let spec = doctor.specialization.to_lowercase();

    let mut score = 0.0;
    for (keywords, fragments, bonus) in SPECIALIZATION_RULES {
        if keywords.iter().any(|k| q.contains(k)) && fragments.iter().any(|f| spec.contains(f)) {
            score += bonus;
        }
    }

    score += doctor.rating * RATING_WEIGHT + f64::from(doctor.experience) * EXPERIENCE_WEIGHT;

    if let Some(user) = user {
        let dist = geo::distance_km(user, &doctor.location());
        if dist.is_finite() {
            score += (PROXIMITY_RADIUS_KM - dist.min(PROXIMITY_RADIUS_KM)).max(0.0);
        }
    }

    score
}
