use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::errors::TelemetryError;
use crate::record::{FIELD_NAMES, TelemetryRecord};

/// Read a delimited-table telemetry file back into memory.
///
/// # Errors
/// Returns an error if the file cannot be opened or a row fails to parse.
pub fn read_csv_file(path: impl AsRef<Path>) -> Result<Vec<TelemetryRecord>, TelemetryError> {
    let file = File::open(path.as_ref())?;
    read_csv(file)
}

/// Naive typed parse of the delimited table: every row becomes a fully
/// typed record. A row missing a column or carrying an unparsable value
/// aborts the whole parse; there is no skip mode and no partial result.
///
/// # Errors
/// Returns `MalformedRow` on the first bad row, `Csv` on reader-level
/// failures.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<TelemetryRecord>, TelemetryError> {
    let mut rdr =
        csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut columns = [0usize; FIELD_NAMES.len()];
    for (i, name) in FIELD_NAMES.iter().enumerate() {
        columns[i] = headers.iter().position(|h| h == *name).ok_or_else(|| {
            TelemetryError::MalformedRow { row: 0, reason: format!("missing column: {name}") }
        })?;
    }
    let mut records = Vec::new();
    let mut row_no: usize = 0;
    for rec in rdr.records() {
        row_no += 1;
        let rec = rec?;
        records.push(parse_row(&rec, &columns, row_no)?);
    }
    Ok(records)
}

fn parse_row(
    rec: &csv::StringRecord,
    columns: &[usize; FIELD_NAMES.len()],
    row: usize,
) -> Result<TelemetryRecord, TelemetryError> {
    Ok(TelemetryRecord {
        vehicle_id: field(rec, columns[0], row, "vehicle_id")?.to_string(),
        timestamp: parse_timestamp(field(rec, columns[1], row, "timestamp")?, row)?,
        latitude: parse_f64(field(rec, columns[2], row, "latitude")?, row, "latitude")?,
        longitude: parse_f64(field(rec, columns[3], row, "longitude")?, row, "longitude")?,
        speed: parse_f64(field(rec, columns[4], row, "speed")?, row, "speed")?,
        heading: parse_f64(field(rec, columns[5], row, "heading")?, row, "heading")?,
        engine_rpm: parse_u32(field(rec, columns[6], row, "engine_rpm")?, row, "engine_rpm")?,
        fuel_level: parse_f64(field(rec, columns[7], row, "fuel_level")?, row, "fuel_level")?,
        odometer_km: parse_f64(field(rec, columns[8], row, "odometer_km")?, row, "odometer_km")?,
        engine_temp: parse_f64(field(rec, columns[9], row, "engine_temp")?, row, "engine_temp")?,
        battery_volt: parse_f64(
            field(rec, columns[10], row, "battery_volt")?,
            row,
            "battery_volt",
        )?,
        diagnostic_code: field(rec, columns[11], row, "diagnostic_code")?.to_string(),
    })
}

fn field<'a>(
    rec: &'a csv::StringRecord,
    idx: usize,
    row: usize,
    name: &str,
) -> Result<&'a str, TelemetryError> {
    rec.get(idx).ok_or_else(|| TelemetryError::MalformedRow {
        row,
        reason: format!("missing field: {name}"),
    })
}

fn parse_timestamp(s: &str, row: usize) -> Result<DateTime<Utc>, TelemetryError> {
    DateTime::parse_from_rfc3339(s).map(|d| d.with_timezone(&Utc)).map_err(|e| {
        TelemetryError::MalformedRow { row, reason: format!("bad timestamp {s:?}: {e}") }
    })
}

fn parse_f64(s: &str, row: usize, name: &str) -> Result<f64, TelemetryError> {
    s.parse().map_err(|_| TelemetryError::MalformedRow {
        row,
        reason: format!("bad float in {name}: {s:?}"),
    })
}

fn parse_u32(s: &str, row: usize, name: &str) -> Result<u32, TelemetryError> {
    s.parse().map_err(|_| TelemetryError::MalformedRow {
        row,
        reason: format!("bad integer in {name}: {s:?}"),
    })
}
