//! # geo-outliers
//!
//! Command-line interface for great-circle outlier detection.

use clap::{Parser, Subcommand};
use geo_anomaly::{
    validate_coordinates, AnomalyDetector, DetectorConfig, DistanceUnit, GreatCircleDetector,
    RangePolicy, StdDevKind,
};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod input;

use input::load_coordinates;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "geo-outliers")]
#[command(about = "Flag coordinates that lie unusually far from the rest", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect anomalous coordinates in a file
    Detect {
        /// Input file (JSON or CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Standard deviation multiplier
        #[arg(short, long, default_value = "3.0")]
        threshold: f64,

        /// Distance unit (kilometers, miles)
        #[arg(short, long, default_value = "kilometers")]
        unit: String,

        /// Standard deviation convention (population, sample)
        #[arg(long, default_value = "population")]
        std_dev: String,

        /// Require latitude within [-90, 90] instead of [-180, 180]
        #[arg(long)]
        strict_latitude: bool,

        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_std_dev(name: &str) -> CliResult<StdDevKind> {
    match name.to_lowercase().as_str() {
        "population" | "pop" | "n" => Ok(StdDevKind::Population),
        "sample" | "n-1" => Ok(StdDevKind::Sample),
        _ => Err(format!(
            "Unknown std-dev convention: {}. Use 'population' or 'sample'",
            name
        )),
    }
}

/// Run anomaly detection command
fn run_detect(
    input: PathBuf,
    threshold: f64,
    unit: String,
    std_dev: String,
    strict_latitude: bool,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let coords = load_coordinates(&input)?;
    tracing::info!(
        "Loaded {} coordinates from {:?}",
        coords.len(),
        input.file_name().unwrap_or_default()
    );

    let policy = if strict_latitude {
        RangePolicy::Strict
    } else {
        RangePolicy::Loose
    };
    validate_coordinates(&coords, policy).map_err(|e| e.to_string())?;

    let config = DetectorConfig::from_options(Some(threshold), Some(&unit))
        .with_std_dev(parse_std_dev(&std_dev)?);
    if config.threshold != threshold || unit.parse::<DistanceUnit>().ok() != Some(config.unit) {
        tracing::warn!(
            "Using threshold={} unit={} (from threshold={} unit={})",
            config.threshold,
            config.unit,
            threshold,
            unit
        );
    }

    let detector = GreatCircleDetector::from_config(config).map_err(|e| e.to_string())?;
    let report = detector.detect(&coords).map_err(|e| e.to_string())?;
    let scores = detector.score(&coords).map_err(|e| e.to_string())?;
    let anomaly_indices = report.anomaly_indices();

    tracing::info!(
        "Anomalies found: {} of {} (boundary {:.4} {})",
        anomaly_indices.len(),
        coords.len(),
        report.boundary,
        report.unit
    );

    let json = serde_json::json!({
        "threshold": report.threshold,
        "unit": report.unit,
        "std_dev": config.std_dev,
        "total_points": coords.len(),
        "centroid": report.centroid,
        "mean_distance": report.stats.mean,
        "std_distance": report.stats.std_dev,
        "boundary": report.boundary,
        "anomaly_count": anomaly_indices.len(),
        "anomaly_indices": anomaly_indices,
        "anomalies": anomaly_indices.iter().map(|&i| {
            serde_json::json!({
                "index": i,
                "coordinate": [coords[i].latitude, coords[i].longitude],
                "distance": report.distances[i],
                "score": scores[i]
            })
        }).collect::<Vec<_>>()
    });

    if let Some(path) = output {
        let mut file = File::create(&path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, &json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        tracing::info!("Results written to {:?}", path);
    } else {
        let text = serde_json::to_string_pretty(&json)
            .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
        println!("{}", text);
    }

    Ok(())
}

fn main() {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geo_outliers=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Detect {
            input,
            threshold,
            unit,
            std_dev,
            strict_latitude,
            output,
        } => run_detect(input, threshold, unit, std_dev, strict_latitude, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
