//! Basic example demonstrating geographic anomaly detection
//!
//! Run with: cargo run --example basic -p geo-anomaly

use geo_anomaly::{AnomalyDetector, DistanceUnit, GreatCircleDetector, LatLon};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== geo-anomaly Basic Example ===\n");

    // Delivery stops around Berlin, plus one mis-geocoded stop in Lisbon
    let stops = vec![
        LatLon::new(52.5200, 13.4050),
        LatLon::new(52.5163, 13.3777),
        LatLon::new(52.5074, 13.3904),
        LatLon::new(52.5304, 13.4127),
        LatLon::new(52.4990, 13.4180),
        LatLon::new(52.5251, 13.3694),
        LatLon::new(52.5096, 13.3760),
        LatLon::new(52.5219, 13.4132),
        LatLon::new(52.5145, 13.3501),
        LatLon::new(52.5308, 13.3847),
        LatLon::new(52.5027, 13.4320),
        LatLon::new(38.7223, -9.1393),
    ];

    for unit in [DistanceUnit::Kilometers, DistanceUnit::Miles] {
        let detector = GreatCircleDetector::new(3.0, unit)?;
        let report = detector.detect(&stops)?;

        println!("Unit: {}", unit);
        println!(
            "   Centroid: ({:.4}, {:.4})",
            report.centroid.latitude, report.centroid.longitude
        );
        println!(
            "   Mean distance: {:.2}, std: {:.2}, boundary: {:.2}",
            report.stats.mean, report.stats.std_dev, report.boundary
        );
        for i in report.anomaly_indices() {
            println!(
                "   Anomaly #{}: {:?} at {:.2} {}",
                i, stops[i], report.distances[i], unit
            );
        }
        println!();
    }

    let anomalies = GreatCircleDetector::default().detect_anomalies(&stops)?;
    println!("Flagged {} of {} stops", anomalies.len(), stops.len());

    println!("\n=== Example Complete ===");
    Ok(())
}
