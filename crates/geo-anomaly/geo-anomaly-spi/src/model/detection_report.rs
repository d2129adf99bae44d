//! Detection result types.

use serde::{Deserialize, Serialize};

use super::{DistanceUnit, LatLon};

/// Summary statistics of the per-point distances to the centroid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DistanceStats {
    /// Number of distance samples.
    pub count: usize,
    /// Arithmetic mean distance.
    pub mean: f64,
    /// Standard deviation of the distances.
    pub std_dev: f64,
}

impl DistanceStats {
    /// Copy of these statistics with mean and spread multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            count: self.count,
            mean: self.mean * factor,
            std_dev: self.std_dev * factor,
        }
    }
}

/// Full outcome of one detection pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Coordinate-wise mean of the dataset.
    pub centroid: LatLon,
    /// Unit of `distances`, `stats` and `boundary`.
    pub unit: DistanceUnit,
    /// Great-circle distance from each input to the centroid.
    pub distances: Vec<f64>,
    /// Distance statistics.
    pub stats: DistanceStats,
    /// Threshold multiplier used for detection.
    pub threshold: f64,
    /// Deviation from the mean distance beyond which a point is anomalous.
    pub boundary: f64,
    /// Boolean mask indicating anomalies.
    pub is_anomaly: Vec<bool>,
}

impl DetectionReport {
    /// Get indices of detected anomalies.
    pub fn anomaly_indices(&self) -> Vec<usize> {
        self.is_anomaly
            .iter()
            .enumerate()
            .filter_map(|(i, &is_anomaly)| if is_anomaly { Some(i) } else { None })
            .collect()
    }

    /// Count of detected anomalies.
    pub fn anomaly_count(&self) -> usize {
        self.is_anomaly.iter().filter(|&&x| x).count()
    }

    /// Pick the flagged items out of the slice this report was computed from.
    pub fn select<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        items
            .iter()
            .zip(&self.is_anomaly)
            .filter_map(|(item, &flag)| flag.then_some(item))
            .collect()
    }
}
