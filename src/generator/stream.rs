use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::TelemetryError;
use crate::record::{DIAGNOSTIC_CODES, TelemetryRecord};

use super::options::GeneratorOptions;

/// Lazy, single-pass stream of synthetic telemetry records.
///
/// The vehicle pool and per-vehicle odometers are allocated once at
/// construction; the odometer table is the only state mutated while
/// iterating. Vehicle selection is independent per record, so a vehicle
/// may be sampled any number of times or not at all.
pub struct RecordStream {
    rng: StdRng,
    vehicles: Vec<String>,
    /// Current odometer reading per vehicle, indexed like `vehicles`.
    odometers: Vec<f64>,
    start_time: DateTime<Utc>,
    origin_lat: f64,
    origin_lon: f64,
    drift_max: f64,
    count: u64,
    emitted: u64,
}

impl RecordStream {
    /// Builds a stream that yields exactly `opts.count` records.
    ///
    /// # Errors
    /// Returns `InvalidArgument` when the vehicle pool would be empty or
    /// the drift bound is negative.
    pub fn new(opts: &GeneratorOptions) -> Result<Self, TelemetryError> {
        if opts.vehicle_count == 0 {
            return Err(TelemetryError::InvalidArgument(
                "vehicle_count must be at least 1".to_string(),
            ));
        }
        if opts.odometer_drift_max < 0.0 {
            return Err(TelemetryError::InvalidArgument(
                "odometer_drift_max must be non-negative".to_string(),
            ));
        }
        let mut rng = match opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let vehicles: Vec<String> =
            (1..=opts.vehicle_count).map(|i| format!("VEH-{i:03}")).collect();
        let odometers: Vec<f64> =
            vehicles.iter().map(|_| rng.random_range(50_000.0..150_000.0)).collect();
        Ok(Self {
            rng,
            vehicles,
            odometers,
            start_time: opts.start_time,
            origin_lat: opts.origin_lat,
            origin_lon: opts.origin_lon,
            drift_max: opts.odometer_drift_max,
            count: opts.count,
            emitted: 0,
        })
    }
}

impl Iterator for RecordStream {
    type Item = TelemetryRecord;

    fn next(&mut self) -> Option<TelemetryRecord> {
        if self.emitted >= self.count {
            return None;
        }
        let idx = self.rng.random_range(0..self.vehicles.len());
        // The post-increment value is emitted, so per-vehicle odometer
        // readings never regress across the sequence.
        if self.drift_max > 0.0 {
            self.odometers[idx] += self.rng.random_range(0.0..self.drift_max);
        }

        #[allow(clippy::cast_possible_wrap)]
        let timestamp = self.start_time + Duration::seconds(self.emitted as i64);
        let record = TelemetryRecord {
            vehicle_id: self.vehicles[idx].clone(),
            timestamp,
            latitude: self.origin_lat + self.rng.random_range(-0.005..0.005),
            longitude: self.origin_lon + self.rng.random_range(-0.005..0.005),
            speed: self.rng.random_range(0.0..120.0),
            heading: self.rng.random_range(0.0..360.0),
            engine_rpm: self.rng.random_range(800..6000),
            fuel_level: self.rng.random_range(15.0..100.0),
            odometer_km: self.odometers[idx],
            engine_temp: self.rng.random_range(75.0..110.0),
            battery_volt: self.rng.random_range(11.5..14.0),
            diagnostic_code: DIAGNOSTIC_CODES[self.rng.random_range(0..DIAGNOSTIC_CODES.len())]
                .to_string(),
        };
        self.emitted += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        #[allow(clippy::cast_possible_truncation)]
        let remaining = (self.count - self.emitted) as usize;
        (remaining, Some(remaining))
    }
}
