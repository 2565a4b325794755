use chrono::{DateTime, Duration, Utc};

/// Fine per-sample odometer increment bound (km), the standard profile.
pub const DRIFT_FINE: f64 = 0.02;

/// Coarse increment bound used for quick throwaway fixtures.
pub const DRIFT_COARSE: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub count: u64,
    pub vehicle_count: u32,
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub start_time: DateTime<Utc>,
    /// Upper bound of the uniform odometer increment applied each time a
    /// vehicle is sampled.
    pub odometer_drift_max: f64,
    /// Fixed seed for reproducible output; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            count: 10_000,
            vehicle_count: 10,
            origin_lat: 28.5383, // Orlando, FL
            origin_lon: -81.3792,
            start_time: Utc::now() - Duration::days(1),
            odometer_drift_max: DRIFT_FINE,
            seed: None,
        }
    }
}
