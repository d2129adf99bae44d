//! Great-circle distance on a sphere.

use geo_anomaly_spi::{DistanceUnit, LatLon};

/// Central angle between two positions, in radians.
///
/// Uses the haversine form, which stays accurate for very small separations
/// where the spherical law of cosines loses precision.
pub fn angular_distance(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Great-circle distance between two positions in the given unit.
pub fn great_circle_distance(a: LatLon, b: LatLon, unit: DistanceUnit) -> f64 {
    angular_distance(a, b) * unit.earth_radius()
}
