//! Data models for geographic anomaly detection.
//!
//! This module contains data structures used throughout the detection pipeline.

mod detection_report;
mod distance_unit;
mod lat_lon;

pub use detection_report::{DetectionReport, DistanceStats};
pub use distance_unit::{DistanceUnit, EARTH_RADIUS_KM, EARTH_RADIUS_MILES};
pub use lat_lon::LatLon;
