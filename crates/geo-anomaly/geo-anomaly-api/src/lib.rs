//! Geographic Anomaly Detection API
//!
//! Configuration types for geographic anomaly detection.

use serde::{Deserialize, Deserializer, Serialize};

// Re-export SPI types
pub use geo_anomaly_spi::{
    DetectionReport, DistanceStats, DistanceUnit, GeoAnomalyError, LatLon, Result,
};

/// Default standard deviation multiplier.
pub const DEFAULT_THRESHOLD: f64 = 3.0;

// ============================================================================
// Statistics Convention
// ============================================================================

/// Denominator convention for the distance standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdDevKind {
    /// Divide by N.
    #[default]
    Population,
    /// Divide by N - 1.
    Sample,
}

// ============================================================================
// Range Policy
// ============================================================================

/// Bounds enforced by coordinate validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Both components within [-180, 180].
    #[default]
    Loose,
    /// Latitude within [-90, 90], longitude within [-180, 180].
    Strict,
}

impl RangePolicy {
    /// Inclusive latitude bounds.
    pub fn latitude_bounds(self) -> (f64, f64) {
        match self {
            RangePolicy::Loose => (-180.0, 180.0),
            RangePolicy::Strict => (-90.0, 90.0),
        }
    }

    /// Inclusive longitude bounds.
    pub fn longitude_bounds(self) -> (f64, f64) {
        (-180.0, 180.0)
    }
}

// ============================================================================
// Detector Configuration
// ============================================================================

/// Great-circle detector configuration.
///
/// Deserialization is lenient: absent fields, non-positive thresholds and
/// unknown unit names all fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Standard deviation multiplier for anomaly detection (default: 3.0).
    #[serde(deserialize_with = "lenient_threshold")]
    pub threshold: f64,
    /// Unit of reported distances (default: kilometers).
    #[serde(deserialize_with = "lenient_unit")]
    pub unit: DistanceUnit,
    /// Standard deviation convention (default: population).
    pub std_dev: StdDevKind,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            unit: DistanceUnit::Kilometers,
            std_dev: StdDevKind::Population,
        }
    }
}

impl DetectorConfig {
    pub fn new(threshold: f64, unit: DistanceUnit) -> Self {
        Self {
            threshold,
            unit,
            ..Self::default()
        }
    }

    /// Build from loosely typed options, substituting defaults for anything
    /// absent or unusable.
    pub fn from_options(threshold: Option<f64>, unit: Option<&str>) -> Self {
        Self {
            threshold: threshold
                .filter(|t| is_valid_threshold(*t))
                .unwrap_or(DEFAULT_THRESHOLD),
            unit: unit.and_then(|u| u.parse().ok()).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_std_dev(mut self, std_dev: StdDevKind) -> Self {
        self.std_dev = std_dev;
        self
    }

    /// Reject configurations a detector cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_threshold(self.threshold) {
            return Err(GeoAnomalyError::InvalidParameter {
                name: "threshold".to_string(),
                reason: format!("must be a finite number greater than 0, got {}", self.threshold),
            });
        }
        Ok(())
    }
}

fn is_valid_threshold(threshold: f64) -> bool {
    threshold.is_finite() && threshold > 0.0
}

/// A field value of the expected type, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    #[allow(dead_code)]
    Other(serde::de::IgnoredAny),
}

fn lenient_threshold<'de, D>(d: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::<f64>::deserialize(d)? {
        Lenient::Value(t) if is_valid_threshold(t) => t,
        _ => DEFAULT_THRESHOLD,
    })
}

fn lenient_unit<'de, D>(d: D) -> std::result::Result<DistanceUnit, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::<String>::deserialize(d)? {
        Lenient::Value(s) => s.parse().unwrap_or_default(),
        Lenient::Other(_) => DistanceUnit::default(),
    })
}
