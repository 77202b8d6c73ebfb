use crate::models::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points, haversine over a
/// spherical Earth.
///
/// Returns positive infinity ("unknown distance") when either point is
/// missing a coordinate, or when any coordinate is exactly zero — the
/// backing store writes 0 for doctors with no recorded location, so a zero
/// here cannot be told apart from absent.
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let (Some(lat1), Some(lon1), Some(lat2), Some(lon2)) = (a.lat, a.long, b.lat, b.long) else {
        return f64::INFINITY;
    };
    if lat1 == 0.0 || lon1 == 0.0 || lat2 == 0.0 || lon2 == 0.0 {
        return f64::INFINITY;
    }

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let x = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * (lat1.to_radians().cos() * lat2.to_radians().cos());
    let c = 2.0 * x.sqrt().atan2((1.0 - x).sqrt());

    EARTH_RADIUS_KM * c
}
