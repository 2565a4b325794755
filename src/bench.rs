use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::errors::TelemetryError;
use crate::reader;

#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// Number of timed parse iterations to average over.
    pub iterations: u32,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self { iterations: 3 }
    }
}

/// Result of timing repeated parses of one delimited-table file.
#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub parser: String,
    pub records_parsed: usize,
    pub time_ms: f64,
    pub records_per_sec: u64,
}

/// Parse `path` `opts.iterations` times and report the average wall-clock
/// time and throughput. Every iteration re-reads the file and accumulates
/// the typed records in memory, the same work a downstream parser would do.
///
/// # Errors
/// Returns `InvalidArgument` for zero iterations, otherwise whatever the
/// parse fails with.
pub fn run_csv_benchmark(
    path: impl AsRef<Path>,
    opts: &BenchOptions,
) -> Result<BenchReport, TelemetryError> {
    if opts.iterations == 0 {
        return Err(TelemetryError::InvalidArgument("iterations must be at least 1".to_string()));
    }
    let path = path.as_ref();
    log::info!("bench: path={}, iterations={}", path.display(), opts.iterations);
    let mut total_ms = 0.0_f64;
    let mut records_parsed: usize = 0;
    for i in 0..opts.iterations {
        let start = Instant::now();
        let records = reader::read_csv_file(path)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        total_ms += elapsed_ms;
        records_parsed = records.len();
        log::info!("bench: iteration {}/{}: {:.2} ms", i + 1, opts.iterations, elapsed_ms);
    }
    let time_ms = total_ms / f64::from(opts.iterations);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let records_per_sec =
        if time_ms > 0.0 { (records_parsed as f64 / (time_ms / 1000.0)) as u64 } else { 0 };
    Ok(BenchReport { parser: "fleetlite".to_string(), records_parsed, time_ms, records_per_sec })
}
