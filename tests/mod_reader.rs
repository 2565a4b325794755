use std::io::Cursor;

use chrono::{TimeZone, Utc};
use fleetlite::errors::TelemetryError;
use fleetlite::generator::{GeneratorOptions, RecordStream};
use fleetlite::reader;
use fleetlite::record::FIELD_NAMES;
use fleetlite::writers::{self, WriteOptions};

fn seeded_opts(count: u64, seed: u64) -> GeneratorOptions {
    GeneratorOptions {
        count,
        vehicle_count: 3,
        start_time: Utc.with_ymd_and_hms(2025, 6, 2, 8, 30, 0).unwrap(),
        seed: Some(seed),
        ..GeneratorOptions::default()
    }
}

#[test]
fn roundtrip_preserves_fields_within_precision() {
    let opts = seeded_opts(100, 21);
    let originals: Vec<_> = RecordStream::new(&opts).unwrap().collect();
    let mut buf = Vec::new();
    writers::write_to_writer(originals.iter().cloned(), &mut buf, &WriteOptions::default())
        .unwrap();

    let parsed = reader::read_csv(Cursor::new(buf)).unwrap();
    assert_eq!(parsed.len(), originals.len());
    for (orig, back) in originals.iter().zip(&parsed) {
        assert_eq!(back.vehicle_id, orig.vehicle_id);
        assert_eq!(back.timestamp, orig.timestamp);
        assert_eq!(back.engine_rpm, orig.engine_rpm);
        assert_eq!(back.diagnostic_code, orig.diagnostic_code);
        // 6 decimal digits for coordinates, 2 for the rest
        assert!((back.latitude - orig.latitude).abs() < 5.1e-7);
        assert!((back.longitude - orig.longitude).abs() < 5.1e-7);
        assert!((back.speed - orig.speed).abs() < 5.1e-3);
        assert!((back.heading - orig.heading).abs() < 5.1e-3);
        assert!((back.fuel_level - orig.fuel_level).abs() < 5.1e-3);
        assert!((back.odometer_km - orig.odometer_km).abs() < 5.1e-3);
        assert!((back.engine_temp - orig.engine_temp).abs() < 5.1e-3);
        assert!((back.battery_volt - orig.battery_volt).abs() < 5.1e-3);
    }
}

#[test]
fn header_only_input_parses_to_empty() {
    let csv = format!("{}\n", FIELD_NAMES.join(","));
    let parsed = reader::read_csv(Cursor::new(csv.into_bytes())).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn missing_column_aborts() {
    let headers = FIELD_NAMES[..FIELD_NAMES.len() - 1].join(",");
    let err = reader::read_csv(Cursor::new(format!("{headers}\n").into_bytes())).unwrap_err();
    match err {
        TelemetryError::MalformedRow { row, reason } => {
            assert_eq!(row, 0);
            assert!(reason.contains("diagnostic_code"));
        }
        other => panic!("expected MalformedRow, got {other}"),
    }
}

#[test]
fn unparsable_number_aborts_whole_parse() {
    let mut csv = format!("{}\n", FIELD_NAMES.join(","));
    csv.push_str(
        "VEH-001,2025-06-02T08:30:00Z,28.540000,-81.380000,55.00,180.00,not_a_number,50.00,60000.00,90.00,12.50,\n",
    );
    let err = reader::read_csv(Cursor::new(csv.into_bytes())).unwrap_err();
    match err {
        TelemetryError::MalformedRow { row, reason } => {
            assert_eq!(row, 1);
            assert!(reason.contains("engine_rpm"));
        }
        other => panic!("expected MalformedRow, got {other}"),
    }
}

#[test]
fn short_row_aborts_whole_parse() {
    let mut csv = format!("{}\n", FIELD_NAMES.join(","));
    csv.push_str("VEH-001,2025-06-02T08:30:00Z,28.540000\n");
    let err = reader::read_csv(Cursor::new(csv.into_bytes())).unwrap_err();
    assert!(matches!(err, TelemetryError::MalformedRow { row: 1, .. }));
}

#[test]
fn bad_timestamp_aborts() {
    let mut csv = format!("{}\n", FIELD_NAMES.join(","));
    csv.push_str(
        "VEH-001,yesterday,28.540000,-81.380000,55.00,180.00,2500,50.00,60000.00,90.00,12.50,P0420\n",
    );
    let err = reader::read_csv(Cursor::new(csv.into_bytes())).unwrap_err();
    assert!(matches!(err, TelemetryError::MalformedRow { row: 1, .. }));
}

#[test]
fn missing_file_is_io_error() {
    let err = reader::read_csv_file("/nonexistent/telemetry.csv").unwrap_err();
    assert!(matches!(err, TelemetryError::Io(_)));
}
