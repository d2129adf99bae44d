//! Anomaly detector trait definition.

use crate::contract::Coordinate;
use crate::error::Result;
use crate::model::{DetectionReport, DistanceUnit};

/// Geographic anomaly detector trait.
///
/// Implementations flag coordinates that lie unusually far from, or unusually
/// close to, the rest of the dataset. Detection holds no state between calls.
pub trait AnomalyDetector: Send + Sync {
    /// Run detection and return the full report.
    fn detect<C: Coordinate>(&self, coordinates: &[C]) -> Result<DetectionReport>;

    /// Return the anomalous coordinates, in input order, borrowed from the input.
    fn detect_anomalies<'a, C: Coordinate>(&self, coordinates: &'a [C]) -> Result<Vec<&'a C>> {
        let report = self.detect(coordinates)?;
        Ok(report.select(coordinates))
    }

    /// Compute per-point deviation scores (in standard deviations) without thresholding.
    fn score<C: Coordinate>(&self, coordinates: &[C]) -> Result<Vec<f64>>;

    /// Threshold multiplier applied to the standard deviation.
    fn threshold(&self) -> f64;

    /// Unit of reported distances.
    fn unit(&self) -> DistanceUnit;
}
