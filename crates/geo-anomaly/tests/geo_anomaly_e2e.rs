//! End-to-end tests for geo-anomaly crate
//!
//! Tests complete detection workflows using only this crate's API.

use geo_anomaly::{
    centroid, great_circle_distance, validate_coordinates, AnomalyDetector, DistanceUnit,
    GeoAnomalyError, GreatCircleDetector, LatLon, RangePolicy,
};

/// Vehicle pings around Manhattan with a few GPS glitches.
fn fleet_pings() -> Vec<LatLon> {
    let mut pings: Vec<LatLon> = (0..40)
        .map(|i| {
            let t = i as f64;
            LatLon::new(40.75 + (t * 0.37).sin() * 0.02, -73.98 + (t * 0.53).cos() * 0.02)
        })
        .collect();
    pings[7] = LatLon::new(34.05, -118.24); // Los Angeles
    pings[23] = LatLon::new(51.51, -0.13); // London
    pings
}

#[test]
fn e2e_validate_then_detect() {
    let pings = fleet_pings();

    validate_coordinates(&pings, RangePolicy::Strict).unwrap();

    let detector = GreatCircleDetector::new(2.0, DistanceUnit::Kilometers).unwrap();
    let report = detector.detect(&pings).unwrap();

    assert_eq!(report.distances.len(), pings.len());
    assert_eq!(report.anomaly_indices(), vec![7, 23]);

    let anomalies = report.select(&pings);
    assert_eq!(anomalies, vec![&pings[7], &pings[23]]);
}

#[test]
fn e2e_report_matches_free_functions() {
    let pings = fleet_pings();
    let report = GreatCircleDetector::default().detect(&pings).unwrap();

    let c = centroid(&pings).unwrap();
    assert_eq!(report.centroid, c);

    for (p, d) in pings.iter().zip(&report.distances) {
        let expected = great_circle_distance(*p, c, DistanceUnit::Kilometers);
        assert!((expected - d).abs() < 1e-9);
    }
}

#[test]
fn e2e_rejects_out_of_range_at_boundary() {
    let mut pings = fleet_pings();
    pings.push(LatLon::new(40.7, 200.0));

    let err = validate_coordinates(&pings, RangePolicy::Loose).unwrap_err();
    assert!(matches!(
        err,
        GeoAnomalyError::OutOfRange { index: 40, component: "longitude", .. }
    ));
}

#[test]
fn e2e_reuse_detector_across_datasets() {
    let detector = GreatCircleDetector::new(2.0, DistanceUnit::Miles).unwrap();

    let pings = fleet_pings();
    let first = detector.detect_anomalies(&pings).unwrap();
    assert_eq!(first.len(), 2);

    let calm: Vec<LatLon> = pings
        .iter()
        .copied()
        .enumerate()
        .filter(|(i, _)| *i != 7 && *i != 23)
        .map(|(_, p)| p)
        .collect();
    let second = detector.detect_anomalies(&calm).unwrap();
    assert!(second.iter().all(|p| (p.latitude - 40.75).abs() < 0.05));

    // Nothing carried over from the first call.
    let again = detector.detect_anomalies(&pings).unwrap();
    assert_eq!(first, again);
}

#[test]
fn e2e_parse_json_and_detect() {
    let json = r#"[
        [10.0, 10.0],
        {"latitude": 10.001, "longitude": 10.002},
        {"lat": 9.999, "lon": 10.0},
        [10.002, 9.998]
    ]"#;
    let coords: Vec<LatLon> = serde_json::from_str(json).unwrap();

    let anomalies = GreatCircleDetector::default().detect_anomalies(&coords).unwrap();

    assert_eq!(coords.len(), 4);
    assert!(anomalies.is_empty());
}
