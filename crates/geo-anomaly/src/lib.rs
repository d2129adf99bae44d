//! # geo-anomaly
//!
//! Great-circle outlier detection for geographic coordinates.
//!
//! Each coordinate's distance to the dataset's mean position is compared
//! against the mean of those distances; coordinates deviating by more than
//! `threshold` standard deviations are reported.
//!
//! ```
//! use geo_anomaly::{AnomalyDetector, DistanceUnit, GreatCircleDetector};
//!
//! let coords = [[0.0, 0.0], [0.1, 0.1], [-0.1, -0.1], [0.05, -0.05], [50.0, 50.0]];
//! let detector = GreatCircleDetector::new(1.5, DistanceUnit::Kilometers)?;
//! assert_eq!(detector.detect_anomalies(&coords)?, vec![&[50.0, 50.0]]);
//! # Ok::<(), geo_anomaly::GeoAnomalyError>(())
//! ```

pub use geo_anomaly_facade::*;
