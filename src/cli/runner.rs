use std::path::PathBuf;

use chrono::{Duration, Utc};

use crate::bench::BenchOptions;
use crate::errors::TelemetryError;
use crate::generator::GeneratorOptions;
use crate::writers::{WriteFormat, WriteOptions};

use super::command::Command;
use super::util::parse_write_format;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputMode {
    Human,
    Plain,
    Json,
}

pub fn run(cmd: Command) -> Result<(), Box<dyn std::error::Error>> {
    run_with_format(cmd, OutputMode::Human)
}

pub fn run_with_format(cmd: Command, mode: OutputMode) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Command::Generate { records, vehicles, format, output, seed, drift_max, benchmark } => {
            let mut gen_opts = GeneratorOptions {
                count: records,
                vehicle_count: vehicles,
                start_time: Utc::now() - Duration::days(1),
                seed,
                ..GeneratorOptions::default()
            };
            if let Some(d) = drift_max {
                gen_opts.odometer_drift_max = d;
            }
            let mut outputs: Vec<(WriteFormat, PathBuf, u64)> = Vec::new();
            for f in parse_write_format(&format).formats() {
                let path = output.with_extension(f.extension());
                let write_opts = WriteOptions { format: f, ..WriteOptions::default() };
                let report = crate::generate_file(&gen_opts, &write_opts, &path)?;
                outputs.push((f, path, report.written));
            }
            match mode {
                OutputMode::Json => {
                    let files: Vec<serde_json::Value> = outputs
                        .iter()
                        .map(|(f, p, n)| {
                            serde_json::json!({
                                "format": f.extension(),
                                "path": p.display().to_string(),
                                "written": n,
                            })
                        })
                        .collect();
                    let json = serde_json::json!({"action": "generate", "files": files});
                    println!("{json}");
                }
                OutputMode::Plain => {
                    for (f, p, n) in &outputs {
                        println!("{} {} {}", f.extension(), p.display(), n);
                    }
                }
                OutputMode::Human => {
                    for (f, p, n) in &outputs {
                        println!("wrote {n} records to {} ({})", p.display(), f.extension());
                    }
                }
            }
            if benchmark {
                let csv_path = outputs
                    .iter()
                    .find(|(f, _, _)| *f == WriteFormat::Csv)
                    .map(|(_, p, _)| p.clone());
                let Some(path) = csv_path else {
                    return Err(Box::new(TelemetryError::InvalidArgument(
                        "--benchmark requires the csv format".to_string(),
                    )));
                };
                let report = crate::benchmark_file(&path, &BenchOptions::default())?;
                println!("{}", serde_json::to_string(&report)?);
            }
            Ok(())
        }
        Command::Bench { file, iterations } => {
            // Single JSON object on stdout regardless of mode, so the
            // output stays consumable by comparison tooling.
            let Some(path) = file else {
                println!("{}", serde_json::json!({"error": "No file provided"}));
                std::process::exit(1);
            };
            let report = crate::benchmark_file(&path, &BenchOptions { iterations })?;
            println!("{}", serde_json::to_string(&report)?);
            Ok(())
        }
    }
}
