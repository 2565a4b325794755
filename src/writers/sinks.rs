use std::io::{self, BufWriter, Write};

use crate::record::{FIELD_NAMES, TelemetryRecord};

/// Consume a sequence of telemetry records and produce bytes on a sink,
/// in a fixed field order.
pub trait RecordSink {
    fn write_record(&mut self, rec: &TelemetryRecord) -> io::Result<()>;
    fn finish(self: Box<Self>) -> io::Result<()>;
}

/// Delimited table: one header row, then one row per record. Streaming.
///
/// Field values never contain the delimiter, so a naive split-on-separator
/// reader can consume the output without understanding quoting.
pub struct CsvSink<W: Write> {
    w: csv::Writer<BufWriter<W>>,
    wrote_header: bool,
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W, delimiter: u8) -> Self {
        let w = csv::WriterBuilder::new().delimiter(delimiter).from_writer(BufWriter::new(inner));
        Self { w, wrote_header: false }
    }

    fn write_header(&mut self) -> io::Result<()> {
        self.w.write_record(FIELD_NAMES).map_err(|e| io::Error::other(e.to_string()))?;
        self.wrote_header = true;
        Ok(())
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, rec: &TelemetryRecord) -> io::Result<()> {
        if !self.wrote_header {
            self.write_header()?;
        }
        let row = [
            rec.vehicle_id.clone(),
            rec.timestamp_string(),
            format!("{:.6}", rec.latitude),
            format!("{:.6}", rec.longitude),
            format!("{:.2}", rec.speed),
            format!("{:.2}", rec.heading),
            rec.engine_rpm.to_string(),
            format!("{:.2}", rec.fuel_level),
            format!("{:.2}", rec.odometer_km),
            format!("{:.2}", rec.engine_temp),
            format!("{:.2}", rec.battery_volt),
            rec.diagnostic_code.clone(),
        ];
        self.w.write_record(&row).map_err(|e| io::Error::other(e.to_string()))
    }

    fn finish(mut self: Box<Self>) -> io::Result<()> {
        // An empty sequence still gets the header row.
        if !self.wrote_header {
            self.write_header()?;
        }
        self.w.flush()
    }
}

/// Structured document: buffers the whole sequence, then emits a single
/// pretty-printed JSON array of field maps. O(count) memory, unlike the
/// streaming sinks.
pub struct JsonSink<W: Write> {
    w: BufWriter<W>,
    records: Vec<TelemetryRecord>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(inner: W) -> Self {
        Self { w: BufWriter::new(inner), records: Vec::new() }
    }
}

impl<W: Write> RecordSink for JsonSink<W> {
    fn write_record(&mut self, rec: &TelemetryRecord) -> io::Result<()> {
        self.records.push(rec.clone());
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.w, &self.records)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.w.flush()
    }
}

/// Pipe-delimited log: two comment lines documenting the format, then one
/// line per record. The lat,lon pair shares a field with a `,`
/// sub-delimiter; there is no field-name header row.
pub struct LogSink<W: Write> {
    w: BufWriter<W>,
    wrote_preamble: bool,
}

impl<W: Write> LogSink<W> {
    pub fn new(inner: W) -> Self {
        Self { w: BufWriter::new(inner), wrote_preamble: false }
    }

    fn write_preamble(&mut self) -> io::Result<()> {
        writeln!(self.w, "# Fleet Telemetry Log")?;
        writeln!(
            self.w,
            "# Format: timestamp|vehicle_id|lat,lon|speed|rpm|fuel|odo|temp|batt|diag"
        )?;
        self.wrote_preamble = true;
        Ok(())
    }
}

impl<W: Write> RecordSink for LogSink<W> {
    fn write_record(&mut self, rec: &TelemetryRecord) -> io::Result<()> {
        if !self.wrote_preamble {
            self.write_preamble()?;
        }
        writeln!(
            self.w,
            "{}|{}|{:.6},{:.6}|{:.2}|{}|{:.2}|{:.2}|{:.2}|{:.2}|{}",
            rec.timestamp_string(),
            rec.vehicle_id,
            rec.latitude,
            rec.longitude,
            rec.speed,
            rec.engine_rpm,
            rec.fuel_level,
            rec.odometer_km,
            rec.engine_temp,
            rec.battery_volt,
            rec.diagnostic_code
        )
    }

    fn finish(mut self: Box<Self>) -> io::Result<()> {
        if !self.wrote_preamble {
            self.write_preamble()?;
        }
        self.w.flush()
    }
}
