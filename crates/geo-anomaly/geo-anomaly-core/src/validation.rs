//! Coordinate range validation for input boundaries.

use geo_anomaly_api::RangePolicy;
use geo_anomaly_spi::{resolve, Coordinate, GeoAnomalyError, Result};

/// Check that every coordinate resolves and lies within the policy's bounds.
///
/// Detection itself does not call this; it is meant for the layer that
/// accepts coordinates from outside.
pub fn validate_coordinates<C: Coordinate>(coordinates: &[C], policy: RangePolicy) -> Result<()> {
    for (index, coord) in coordinates.iter().enumerate() {
        let (lat, lon) = resolve(index, coord).map_err(|e| {
            tracing::warn!("rejected coordinate: {}", e);
            e
        })?;
        check(index, "latitude", lat, policy.latitude_bounds())?;
        check(index, "longitude", lon, policy.longitude_bounds())?;
    }
    Ok(())
}

fn check(index: usize, component: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if value < min || value > max {
        let err = GeoAnomalyError::OutOfRange {
            index,
            component,
            value,
            min,
            max,
        };
        tracing::warn!("rejected coordinate: {}", err);
        return Err(err);
    }
    Ok(())
}
