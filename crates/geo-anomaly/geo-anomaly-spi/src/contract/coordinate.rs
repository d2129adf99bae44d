//! Coordinate accessor trait.

use crate::error::{GeoAnomalyError, Result};

/// Anything that can report a latitude and longitude in degrees.
///
/// Accessors return `None` when the component is missing. Raw pairs and
/// accessor structs both implement this trait, so detectors never need to
/// inspect the shape of their input.
pub trait Coordinate {
    /// Latitude in degrees.
    fn latitude(&self) -> Option<f64>;

    /// Longitude in degrees.
    fn longitude(&self) -> Option<f64>;
}

impl<T: Coordinate + ?Sized> Coordinate for &T {
    fn latitude(&self) -> Option<f64> {
        (**self).latitude()
    }

    fn longitude(&self) -> Option<f64> {
        (**self).longitude()
    }
}

impl Coordinate for (f64, f64) {
    fn latitude(&self) -> Option<f64> {
        Some(self.0)
    }

    fn longitude(&self) -> Option<f64> {
        Some(self.1)
    }
}

impl Coordinate for [f64; 2] {
    fn latitude(&self) -> Option<f64> {
        Some(self[0])
    }

    fn longitude(&self) -> Option<f64> {
        Some(self[1])
    }
}

impl Coordinate for (Option<f64>, Option<f64>) {
    fn latitude(&self) -> Option<f64> {
        self.0
    }

    fn longitude(&self) -> Option<f64> {
        self.1
    }
}

impl Coordinate for [Option<f64>; 2] {
    fn latitude(&self) -> Option<f64> {
        self[0]
    }

    fn longitude(&self) -> Option<f64> {
        self[1]
    }
}

/// Normalize the coordinate at `index` to a finite `(latitude, longitude)` pair.
pub fn resolve<C: Coordinate + ?Sized>(index: usize, coord: &C) -> Result<(f64, f64)> {
    let lat = component(index, "latitude", coord.latitude())?;
    let lon = component(index, "longitude", coord.longitude())?;
    Ok((lat, lon))
}

fn component(index: usize, name: &str, value: Option<f64>) -> Result<f64> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => Err(GeoAnomalyError::malformed(
            index,
            format!("{} is not a finite number ({})", name, v),
        )),
        None => Err(GeoAnomalyError::malformed(index, format!("{} is missing", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_accessors() {
        let pair = (10.0, 20.0);
        assert_eq!(pair.latitude(), Some(10.0));
        assert_eq!(pair.longitude(), Some(20.0));

        let arr = [-45.5, 170.25];
        assert_eq!(resolve(0, &arr).unwrap(), (-45.5, 170.25));
    }

    #[test]
    fn test_reference_forwards() {
        let arr = [1.0, 2.0];
        let r = &arr;
        assert_eq!(resolve(0, &r).unwrap(), (1.0, 2.0));
    }

    #[test]
    fn test_missing_latitude_is_malformed() {
        let coord = [None, Some(5.0)];
        let err = resolve(1, &coord).unwrap_err();
        assert_eq!(
            err,
            GeoAnomalyError::MalformedCoordinate {
                index: 1,
                reason: "latitude is missing".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_longitude_is_malformed() {
        let coord = (Some(5.0), None);
        let err = resolve(4, &coord).unwrap_err();
        assert!(matches!(err, GeoAnomalyError::MalformedCoordinate { index: 4, .. }));
        assert!(err.to_string().contains("longitude is missing"));
    }

    #[test]
    fn test_non_finite_is_malformed() {
        assert!(resolve(0, &(f64::NAN, 0.0)).is_err());
        assert!(resolve(0, &(0.0, f64::INFINITY)).is_err());
    }
}
