//! Coordinate file loading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use geo_anomaly::Coordinate;
use serde::Serialize;
use serde_json::Value;

use crate::CliResult;

/// A coordinate as read from a file; either component may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputCoordinate {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Coordinate for InputCoordinate {
    fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    fn longitude(&self) -> Option<f64> {
        self.longitude
    }
}

const LATITUDE_KEYS: [&str; 2] = ["latitude", "lat"];
const LONGITUDE_KEYS: [&str; 4] = ["longitude", "lon", "lng", "long"];

/// Load coordinates from a file (format chosen by extension, JSON then CSV otherwise).
pub fn load_coordinates(path: &Path) -> CliResult<Vec<InputCoordinate>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let open = || File::open(path).map_err(|e| format!("Failed to open file: {}", e));

    match ext.as_str() {
        "json" => parse_json(BufReader::new(open()?)),
        "csv" => parse_csv(BufReader::new(open()?)),
        _ => parse_json(BufReader::new(open()?)).or_else(|_| parse_csv(BufReader::new(open()?))),
    }
}

/// Parse a JSON array of `[lat, lon]` pairs or `{latitude, longitude}` objects,
/// optionally wrapped in an object under `coordinates`, `points`, or `data`.
pub fn parse_json<R: Read>(reader: R) -> CliResult<Vec<InputCoordinate>> {
    let json: Value =
        serde_json::from_reader(reader).map_err(|e| format!("Failed to parse JSON: {}", e))?;

    let items = match &json {
        Value::Array(arr) => arr,
        Value::Object(obj) => ["coordinates", "points", "data"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(|v| v.as_array()))
            .ok_or("JSON object has no coordinates array")?,
        _ => return Err("Expected a JSON array of coordinates".to_string()),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| json_coordinate(i, item))
        .collect()
}

fn json_coordinate(index: usize, item: &Value) -> CliResult<InputCoordinate> {
    match item {
        Value::Array(pair) if pair.len() == 2 => Ok(InputCoordinate {
            latitude: pair[0].as_f64(),
            longitude: pair[1].as_f64(),
        }),
        Value::Array(pair) => Err(format!(
            "Coordinate {} has {} elements, expected 2",
            index,
            pair.len()
        )),
        Value::Object(obj) => {
            let field = |keys: &[&str]| keys.iter().find_map(|k| obj.get(*k)).and_then(Value::as_f64);
            Ok(InputCoordinate {
                latitude: field(&LATITUDE_KEYS),
                longitude: field(&LONGITUDE_KEYS),
            })
        }
        _ => Err(format!("Coordinate {} is neither a pair nor an object", index)),
    }
}

/// Parse CSV with a header row naming latitude and longitude columns.
pub fn parse_csv<R: Read>(reader: R) -> CliResult<Vec<InputCoordinate>> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    let find = |keys: &[&str]| {
        headers
            .iter()
            .position(|h| keys.contains(&h.trim().to_lowercase().as_str()))
    };
    let lat_idx = find(&LATITUDE_KEYS).ok_or("No latitude column found")?;
    let lon_idx = find(&LONGITUDE_KEYS).ok_or("No longitude column found")?;

    let cell = |record: &csv::StringRecord, idx: usize| {
        record.get(idx).and_then(|v| v.trim().parse::<f64>().ok())
    };

    let mut coords = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        coords.push(InputCoordinate {
            latitude: cell(&record, lat_idx),
            longitude: cell(&record, lon_idx),
        });
    }
    Ok(coords)
}
