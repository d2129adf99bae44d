//! Distance sample statistics.

use geo_anomaly_api::StdDevKind;
use geo_anomaly_spi::DistanceStats;

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation under the given denominator convention.
///
/// A sample standard deviation of fewer than two values is 0.
pub fn std_dev(values: &[f64], kind: StdDevKind) -> f64 {
    let n = values.len();
    let denom = match kind {
        StdDevKind::Population if n > 0 => n as f64,
        StdDevKind::Sample if n > 1 => (n - 1) as f64,
        _ => return 0.0,
    };
    let m = mean(values);
    (values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / denom).sqrt()
}

/// Mean and standard deviation of a set of distances.
pub fn distance_stats(values: &[f64], kind: StdDevKind) -> DistanceStats {
    DistanceStats {
        count: values.len(),
        mean: mean(values),
        std_dev: std_dev(values, kind),
    }
}
