use geo_anomaly::{
    validate_coordinates, AnomalyDetector, DistanceUnit, GeoAnomalyError, GreatCircleDetector,
    RangePolicy,
};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = [f64; 2]> {
    (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(lat, lon)| [lat, lon])
}

fn dataset() -> impl Strategy<Value = Vec<[f64; 2]>> {
    prop::collection::vec(coordinate(), 1..60)
}

fn detector(threshold: f64, unit: DistanceUnit) -> GreatCircleDetector {
    GreatCircleDetector::new(threshold, unit).unwrap()
}

proptest! {
    #[test]
    fn anomalies_are_an_ordered_subset(coords in dataset(), threshold in 0.1..5.0f64) {
        let anomalies = detector(threshold, DistanceUnit::Kilometers)
            .detect_anomalies(&coords)
            .unwrap();

        prop_assert!(anomalies.len() <= coords.len());
        let mut last: Option<usize> = None;
        for a in anomalies {
            let idx = coords.iter().position(|c| std::ptr::eq(c, a));
            prop_assert!(idx.is_some(), "anomaly not borrowed from input");
            let idx = idx.unwrap();
            if let Some(prev) = last {
                prop_assert!(idx > prev, "order not preserved: {} after {}", idx, prev);
            }
            last = Some(idx);
        }
    }

    #[test]
    fn detection_is_deterministic(coords in dataset()) {
        let d = GreatCircleDetector::default();
        let first = d.detect(&coords).unwrap();
        let second = d.detect(&coords).unwrap();
        prop_assert_eq!(first.is_anomaly, second.is_anomaly);
        prop_assert_eq!(first.distances, second.distances);
    }

    #[test]
    fn raising_threshold_never_adds_anomalies(
        coords in dataset(),
        low in 0.1..3.0f64,
        extra in 0.0..3.0f64,
    ) {
        let loose = detector(low, DistanceUnit::Kilometers).detect(&coords).unwrap();
        let strict = detector(low + extra, DistanceUnit::Kilometers).detect(&coords).unwrap();

        prop_assert!(strict.anomaly_count() <= loose.anomaly_count());
        for i in strict.anomaly_indices() {
            prop_assert!(loose.is_anomaly[i]);
        }
    }

    #[test]
    fn unit_does_not_change_flags(coords in dataset(), threshold in 0.1..5.0f64) {
        let km = detector(threshold, DistanceUnit::Kilometers).detect(&coords).unwrap();
        let mi = detector(threshold, DistanceUnit::Miles).detect(&coords).unwrap();
        prop_assert_eq!(km.is_anomaly, mi.is_anomaly);
    }

    #[test]
    fn identical_points_are_never_anomalous(point in coordinate(), n in 1usize..40) {
        let coords = vec![point; n];
        let anomalies = GreatCircleDetector::default().detect_anomalies(&coords).unwrap();
        prop_assert!(anomalies.is_empty());
    }

    #[test]
    fn missing_component_fails_whole_call(coords in dataset(), pos in any::<prop::sample::Index>()) {
        let mut raw: Vec<[Option<f64>; 2]> = coords.iter().map(|c| [Some(c[0]), Some(c[1])]).collect();
        let bad = pos.index(raw.len());
        raw[bad][1] = None;

        let err = GreatCircleDetector::default().detect_anomalies(&raw).unwrap_err();
        prop_assert_eq!(
            err,
            GeoAnomalyError::MalformedCoordinate {
                index: bad,
                reason: "longitude is missing".to_string(),
            }
        );
    }

    #[test]
    fn loose_policy_accepts_wide_latitudes(lat in -180.0..=180.0f64, lon in -180.0..=180.0f64) {
        prop_assert!(validate_coordinates(&[[lat, lon]], RangePolicy::Loose).is_ok());
    }

    #[test]
    fn strict_policy_bounds_latitude(lat in -180.0..=180.0f64, lon in -180.0..=180.0f64) {
        let result = validate_coordinates(&[[lat, lon]], RangePolicy::Strict);
        prop_assert_eq!(result.is_ok(), (-90.0..=90.0).contains(&lat));
    }

    #[test]
    fn longitude_beyond_180_always_rejected(lat in -90.0..=90.0f64, lon in 180.001..1000.0f64) {
        for policy in [RangePolicy::Loose, RangePolicy::Strict] {
            prop_assert!(validate_coordinates(&[[lat, lon]], policy).is_err());
            prop_assert!(validate_coordinates(&[[lat, -lon]], policy).is_err());
        }
    }
}
