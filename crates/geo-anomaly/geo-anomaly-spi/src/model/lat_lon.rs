//! Latitude/longitude value type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::contract::Coordinate;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build from a `[latitude, longitude]` pair.
    pub fn from_pair(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }

    /// The `[latitude, longitude]` pair.
    pub fn to_pair(self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl Coordinate for LatLon {
    fn latitude(&self) -> Option<f64> {
        Some(self.latitude)
    }

    fn longitude(&self) -> Option<f64> {
        Some(self.longitude)
    }
}

impl From<(f64, f64)> for LatLon {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<[f64; 2]> for LatLon {
    fn from(pair: [f64; 2]) -> Self {
        Self::from_pair(pair)
    }
}

// Serialized as a `[latitude, longitude]` pair.
impl Serialize for LatLon {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_pair().serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LatLonRepr {
    Pair([f64; 2]),
    Object {
        #[serde(alias = "lat")]
        latitude: f64,
        #[serde(alias = "lon", alias = "lng")]
        longitude: f64,
    },
}

impl<'de> Deserialize<'de> for LatLon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match LatLonRepr::deserialize(deserializer)? {
            LatLonRepr::Pair(pair) => LatLon::from_pair(pair),
            LatLonRepr::Object {
                latitude,
                longitude,
            } => LatLon::new(latitude, longitude),
        })
    }
}
