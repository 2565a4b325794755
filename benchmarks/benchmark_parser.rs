use std::path::Path;

use chrono::{Duration, Utc};
use fleetlite::bench::BenchOptions;
use fleetlite::generator::GeneratorOptions;
use fleetlite::writers::{WriteFormat, WriteOptions};

fn ensure_synthetic_data(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    if Path::new(path).exists() {
        println!("File '{path}' already exists. Skipping generation.");
        return Ok(());
    }
    println!("File not found. Generating synthetic telemetry data...");
    let gen_opts = GeneratorOptions {
        count: 1_000_000,
        vehicle_count: 25,
        start_time: Utc::now() - Duration::days(1),
        ..GeneratorOptions::default()
    };
    let write_opts = WriteOptions { format: WriteFormat::Csv, ..WriteOptions::default() };
    let report = fleetlite::generate_file(&gen_opts, &write_opts, path)?;
    println!("Generated {} rows at '{path}'.", report.written);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let csv_path = "benchmarks/synthetic_telemetry.csv";
    ensure_synthetic_data(csv_path)?;

    let report = fleetlite::benchmark_file(csv_path, &BenchOptions::default())?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
