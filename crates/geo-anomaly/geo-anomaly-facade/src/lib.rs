//! Geographic Anomaly Detection Facade
//!
//! Unified re-exports for the geographic anomaly detection module.
//!
//! This facade provides a single entry point to all functionality:
//! - `Coordinate` and `AnomalyDetector` traits, errors, and models from SPI
//! - Configuration types from API
//! - `GreatCircleDetector`, distance, statistics, and validation from Core

// Re-export everything from SPI
pub use geo_anomaly_spi::*;

// Re-export everything from API
pub use geo_anomaly_api::*;

// Re-export everything from Core
pub use geo_anomaly_core::*;
