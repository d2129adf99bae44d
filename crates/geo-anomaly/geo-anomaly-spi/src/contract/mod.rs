//! Contract definitions for geographic anomaly detection.
//!
//! This module contains trait definitions that providers must implement.

mod anomaly_detector;
mod coordinate;

pub use anomaly_detector::AnomalyDetector;
pub use coordinate::{resolve, Coordinate};
