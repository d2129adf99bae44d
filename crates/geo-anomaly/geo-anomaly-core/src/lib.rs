//! Geographic Anomaly Detection Core
//!
//! Centroid, great-circle distance, distance statistics, validation, and the
//! detector that ties them together.

mod centroid;
mod detector;
mod distance;
mod statistics;
mod validation;

pub use centroid::*;
pub use detector::*;
pub use distance::*;
pub use statistics::*;
pub use validation::*;
