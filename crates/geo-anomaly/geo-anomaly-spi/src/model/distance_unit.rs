//! Distance units and their sphere radii.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoAnomalyError;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Unit of reported great-circle distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Sphere radius used to turn angular distance into linear distance.
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
            DistanceUnit::Miles => EARTH_RADIUS_MILES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "kilometers",
            DistanceUnit::Miles => "miles",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoAnomalyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(DistanceUnit::Kilometers)
            }
            "mi" | "mile" | "miles" => Ok(DistanceUnit::Miles),
            other => Err(GeoAnomalyError::InvalidParameter {
                name: "unit".to_string(),
                reason: format!("unrecognized distance unit '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!("km".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometers);
        assert_eq!("Miles".parse::<DistanceUnit>().unwrap(), DistanceUnit::Miles);
        assert_eq!(" mi ".parse::<DistanceUnit>().unwrap(), DistanceUnit::Miles);
        assert!("furlongs".parse::<DistanceUnit>().is_err());
    }

    #[test]
    fn test_radius() {
        assert_eq!(DistanceUnit::default(), DistanceUnit::Kilometers);
        assert_eq!(DistanceUnit::Kilometers.earth_radius(), 6371.0);
        assert_eq!(DistanceUnit::Miles.earth_radius(), 3959.0);
    }
}
