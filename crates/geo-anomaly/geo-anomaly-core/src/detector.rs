//! Great-circle anomaly detector implementation.

use geo_anomaly_api::{DetectorConfig, StdDevKind};
use geo_anomaly_spi::{
    AnomalyDetector, Coordinate, DetectionReport, DistanceStats, DistanceUnit, LatLon, Result,
};

use crate::centroid::{mean_position, resolve_all};
use crate::distance::angular_distance;
use crate::statistics::distance_stats;

/// Centroid-distance anomaly detector.
///
/// Measures each coordinate's great-circle distance to the dataset's mean
/// position and flags coordinates whose distance deviates from the mean
/// distance by more than `threshold` standard deviations.
///
/// Flagging is decided on angular distances, so the unit only changes the
/// magnitudes reported, never which coordinates are flagged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GreatCircleDetector {
    config: DetectorConfig,
}

/// Angular-domain intermediate shared by `detect` and `score`.
struct Analysis {
    centroid: LatLon,
    angles: Vec<f64>,
    stats: DistanceStats,
}

impl GreatCircleDetector {
    /// Create a detector with the given threshold and unit.
    pub fn new(threshold: f64, unit: DistanceUnit) -> Result<Self> {
        Self::from_config(DetectorConfig::new(threshold, unit))
    }

    /// Create from configuration.
    pub fn from_config(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this detector runs with.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Standard deviation convention in use.
    pub fn std_dev_kind(&self) -> StdDevKind {
        self.config.std_dev
    }

    fn analyze<C: Coordinate>(&self, coordinates: &[C]) -> Result<Analysis> {
        let points = resolve_all(coordinates)?;
        let centroid = mean_position(&points)?;
        let angles: Vec<f64> = points
            .iter()
            .map(|&p| angular_distance(p, centroid))
            .collect();
        let stats = distance_stats(&angles, self.config.std_dev);

        tracing::debug!(
            "centroid ({:.6}, {:.6}) over {} points, mean angle {:.6e} rad, std {:.6e} rad",
            centroid.latitude,
            centroid.longitude,
            stats.count,
            stats.mean,
            stats.std_dev
        );

        Ok(Analysis {
            centroid,
            angles,
            stats,
        })
    }
}

impl AnomalyDetector for GreatCircleDetector {
    fn detect<C: Coordinate>(&self, coordinates: &[C]) -> Result<DetectionReport> {
        let Analysis {
            centroid,
            angles,
            stats,
        } = self.analyze(coordinates)?;

        let boundary = self.config.threshold * stats.std_dev;
        let is_anomaly: Vec<bool> = angles
            .iter()
            .map(|&a| (a - stats.mean).abs() > boundary)
            .collect();

        let radius = self.config.unit.earth_radius();
        let report = DetectionReport {
            centroid,
            unit: self.config.unit,
            distances: angles.iter().map(|a| a * radius).collect(),
            stats: stats.scaled(radius),
            threshold: self.config.threshold,
            boundary: boundary * radius,
            is_anomaly,
        };

        tracing::debug!(
            "{} of {} coordinates flagged at threshold {}",
            report.anomaly_count(),
            report.is_anomaly.len(),
            self.config.threshold
        );
        Ok(report)
    }

    fn score<C: Coordinate>(&self, coordinates: &[C]) -> Result<Vec<f64>> {
        let Analysis { angles, stats, .. } = self.analyze(coordinates)?;
        if stats.std_dev == 0.0 {
            return Ok(vec![0.0; angles.len()]);
        }
        Ok(angles
            .iter()
            .map(|&a| (a - stats.mean) / stats.std_dev)
            .collect())
    }

    fn threshold(&self) -> f64 {
        self.config.threshold
    }

    fn unit(&self) -> DistanceUnit {
        self.config.unit
    }
}
