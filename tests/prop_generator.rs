use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_exact_count_and_ranges(count in 0u64..300, vehicles in 1u32..8, seed in any::<u64>()) {
        use chrono::{TimeZone, Utc};
        use fleetlite::generator::{GeneratorOptions, RecordStream};
        let opts = GeneratorOptions {
            count,
            vehicle_count: vehicles,
            start_time: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            seed: Some(seed),
            ..GeneratorOptions::default()
        };
        let records: Vec<_> = RecordStream::new(&opts).unwrap().collect();
        prop_assert_eq!(records.len() as u64, count);
        for r in &records {
            prop_assert!((r.latitude - opts.origin_lat).abs() <= 0.005);
            prop_assert!((r.longitude - opts.origin_lon).abs() <= 0.005);
            prop_assert!(r.speed >= 0.0 && r.speed < 120.0);
            prop_assert!(r.heading >= 0.0 && r.heading < 360.0);
            prop_assert!(r.engine_rpm >= 800 && r.engine_rpm < 6000);
            prop_assert!(r.fuel_level >= 15.0 && r.fuel_level < 100.0);
            prop_assert!(r.engine_temp >= 75.0 && r.engine_temp < 110.0);
            prop_assert!(r.battery_volt >= 11.5 && r.battery_volt < 14.0);
            prop_assert!(r.odometer_km >= 50_000.0);
        }
    }

    #[test]
    fn prop_csv_roundtrip_count(count in 0u64..120, seed in any::<u64>()) {
        use chrono::{TimeZone, Utc};
        use fleetlite::generator::{GeneratorOptions, RecordStream};
        use fleetlite::reader;
        use fleetlite::writers::{self, WriteOptions};
        use std::io::Cursor;
        let opts = GeneratorOptions {
            count,
            vehicle_count: 4,
            start_time: Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
            seed: Some(seed),
            ..GeneratorOptions::default()
        };
        let mut buf = Vec::new();
        let stream = RecordStream::new(&opts).unwrap();
        writers::write_to_writer(stream, &mut buf, &WriteOptions::default()).unwrap();
        let parsed = reader::read_csv(Cursor::new(buf)).unwrap();
        prop_assert_eq!(parsed.len() as u64, count);
    }
}
