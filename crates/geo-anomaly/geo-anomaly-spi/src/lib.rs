//! Geographic Anomaly Detection Service Provider Interface
//!
//! Defines the coordinate and detector contracts, errors, and result models.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{resolve, AnomalyDetector, Coordinate};
pub use error::{GeoAnomalyError, Result};
pub use model::{
    DetectionReport, DistanceStats, DistanceUnit, LatLon, EARTH_RADIUS_KM, EARTH_RADIUS_MILES,
};
