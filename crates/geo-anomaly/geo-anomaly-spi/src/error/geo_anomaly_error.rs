//! Geographic anomaly detection error types.

use thiserror::Error;

/// Geographic anomaly detection errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoAnomalyError {
    #[error("Invalid input: empty dataset, mean undefined")]
    EmptyDataset,

    #[error("Invalid input: malformed coordinate at index {index} - {reason}")]
    MalformedCoordinate { index: usize, reason: String },

    #[error("Invalid input: {component} {value} at index {index} outside [{min}, {max}]")]
    OutOfRange {
        index: usize,
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl GeoAnomalyError {
    /// True for errors caused by the coordinates handed to a call, as opposed
    /// to detector configuration.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, GeoAnomalyError::InvalidParameter { .. })
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        GeoAnomalyError::MalformedCoordinate {
            index,
            reason: reason.into(),
        }
    }
}

/// Result type for geographic anomaly detection operations.
pub type Result<T> = std::result::Result<T, GeoAnomalyError>;
