use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::record::TelemetryRecord;

use super::options::{WriteFormat, WriteOptions, WriteReport};
use super::sinks::{CsvSink, JsonSink, LogSink, RecordSink};

/// Write a record sequence to a file atomically via a temp file + persist.
///
/// # Errors
/// Returns an error if the destination cannot be created or the
/// write/persist fails.
pub fn write_file(
    records: impl IntoIterator<Item = TelemetryRecord>,
    path: impl AsRef<Path>,
    opts: &WriteOptions,
) -> io::Result<WriteReport> {
    log::info!("write: format={}, path={}", opts.format.extension(), path.as_ref().display());
    let dest = path.as_ref();
    let parent = dest.parent().unwrap_or_else(|| Path::new("."));
    // Ensure parent directory exists
    if !parent.exists() {
        std::fs::create_dir_all(parent)?;
    }
    // Create a NamedTempFile in the same directory to ensure atomic replace
    let mut tmp = NamedTempFile::new_in(parent)?;
    let report = write_to_writer(records, &mut tmp, opts)?;
    // Persist atomically with Windows-friendly retries
    let mut last_err: Option<io::Error> = None;
    for attempt in 0..5 {
        if dest.exists()
            && let Err(e) = std::fs::remove_file(dest)
        {
            last_err = Some(e);
            std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
            continue;
        }
        match tmp.persist(dest) {
            Ok(_f) => {
                return Ok(report);
            }
            Err(pe) => {
                last_err = Some(pe.error);
                tmp = pe.file; // recover temp file and retry
                std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
            }
        }
    }
    Err(last_err.unwrap_or_else(|| io::Error::other("failed to persist output file")))
}

/// Drive the sink selected by `opts.format` over `records`, writing to
/// any `Write` destination.
///
/// # Errors
/// Returns an error if the underlying write fails.
pub fn write_to_writer<W: Write>(
    records: impl IntoIterator<Item = TelemetryRecord>,
    writer: W,
    opts: &WriteOptions,
) -> io::Result<WriteReport> {
    let mut sink: Box<dyn RecordSink + '_> = match opts.format {
        WriteFormat::Csv => Box::new(CsvSink::new(writer, opts.csv.delimiter)),
        WriteFormat::Json => Box::new(JsonSink::new(writer)),
        WriteFormat::Log => Box::new(LogSink::new(writer)),
    };
    let mut report = WriteReport::default();
    for rec in records {
        sink.write_record(&rec)?;
        report.written += 1;
        if let Some(n) = opts.progress_every
            && n > 0
            && report.written % n == 0
        {
            log::info!("wrote {} records ({})", report.written, opts.format.extension());
        }
    }
    sink.finish()?;
    Ok(report)
}
