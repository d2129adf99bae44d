//! Coordinate normalization and the dataset centroid.

use geo_anomaly_spi::{resolve, Coordinate, GeoAnomalyError, LatLon, Result};

/// Normalize every coordinate to a [`LatLon`].
///
/// Fails on an empty dataset before looking at any element, then on the
/// first coordinate with a missing or non-finite component.
pub fn resolve_all<C: Coordinate>(coordinates: &[C]) -> Result<Vec<LatLon>> {
    if coordinates.is_empty() {
        return Err(GeoAnomalyError::EmptyDataset);
    }
    coordinates
        .iter()
        .enumerate()
        .map(|(i, c)| resolve(i, c).map(LatLon::from))
        .collect()
}

/// Coordinate-wise arithmetic mean of the dataset.
///
/// This is a plain average of latitudes and of longitudes, not a spherical
/// center of mass.
pub fn centroid<C: Coordinate>(coordinates: &[C]) -> Result<LatLon> {
    let points = resolve_all(coordinates)?;
    mean_position(&points)
}

pub(crate) fn mean_position(points: &[LatLon]) -> Result<LatLon> {
    if points.is_empty() {
        return Err(GeoAnomalyError::EmptyDataset);
    }
    let n = points.len() as f64;
    let (lat_sum, lon_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.latitude, lon + p.longitude));
    Ok(LatLon::new(lat_sum / n, lon_sum / n))
}
