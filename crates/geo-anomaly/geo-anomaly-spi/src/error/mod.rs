//! Error types for geographic anomaly detection.
//!
//! This module contains error types and the Result alias.

mod geo_anomaly_error;

pub use geo_anomaly_error::{GeoAnomalyError, Result};
