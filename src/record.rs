use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// OBD-II fault codes a record may carry. The empty entries weight the
/// draw so most records report no fault.
pub const DIAGNOSTIC_CODES: &[&str] = &[
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "P0420", // Catalyst System Efficiency Below Threshold
    "P0171", // System Too Lean
    "P0300", // Random/Multiple Cylinder Misfire
    "P0442", // Evaporative Emission Control System Leak
    "P0128", // Coolant Thermostat
    "P0455", // Evaporative Emission System Leak
];

/// Column names in serialization order. Every writer and the CSV reader
/// agree on this order.
pub const FIELD_NAMES: [&str; 12] = [
    "vehicle_id",
    "timestamp",
    "latitude",
    "longitude",
    "speed",
    "heading",
    "engine_rpm",
    "fuel_level",
    "odometer_km",
    "engine_temp",
    "battery_volt",
    "diagnostic_code",
];

/// One timestamped snapshot of a single vehicle's sensor and diagnostic
/// state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryRecord {
    pub vehicle_id: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub heading: f64,
    pub engine_rpm: u32,
    pub fuel_level: f64,
    pub odometer_km: f64,
    pub engine_temp: f64,
    pub battery_volt: f64,
    /// OBD-II fault code, or empty when no fault is present.
    pub diagnostic_code: String,
}

impl TelemetryRecord {
    /// ISO-8601 form of the timestamp shared by every textual format.
    #[must_use]
    pub fn timestamp_string(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

fn serialize_timestamp<S: Serializer>(
    ts: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
}
