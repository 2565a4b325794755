pub mod bench;
pub mod cli;
pub mod errors;
pub mod generator;
pub mod logger;
pub mod reader;
pub mod record;
pub mod writers;

use std::path::Path;

use crate::bench::{BenchOptions, BenchReport};
use crate::errors::TelemetryError;
use crate::generator::{GeneratorOptions, RecordStream};
use crate::writers::{WriteOptions, WriteReport};

/// Generate `opts.count` records and write them to `path` in the format
/// selected by `write_opts`. Records stream straight into the sink; only
/// the structured-document format buffers them.
///
/// # Errors
/// Returns `InvalidArgument` for bad generation parameters, `Io` when the
/// destination cannot be written.
pub fn generate_file(
    opts: &GeneratorOptions,
    write_opts: &WriteOptions,
    path: impl AsRef<Path>,
) -> Result<WriteReport, TelemetryError> {
    let stream = RecordStream::new(opts)?;
    Ok(writers::write_file(stream, path, write_opts)?)
}

/// Time repeated typed parses of a previously generated delimited-table
/// file.
///
/// # Errors
/// Propagates parse and I/O failures from the underlying reader.
pub fn benchmark_file(
    path: impl AsRef<Path>,
    opts: &BenchOptions,
) -> Result<BenchReport, TelemetryError> {
    bench::run_csv_benchmark(path, opts)
}

/// Initializes the toolkit.
///
/// This function should be called before any other operations. It sets up
/// the logger.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    logger::init()?;
    Ok(())
}
