#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteFormat {
    Csv,
    Json,
    Log,
}

impl WriteFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            WriteFormat::Csv => "csv",
            WriteFormat::Json => "json",
            WriteFormat::Log => "log",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

#[derive(Debug, Clone)]
pub struct WriteOptions {
    pub format: WriteFormat,
    pub csv: CsvOptions,
    pub progress_every: Option<u64>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { format: WriteFormat::Csv, csv: CsvOptions::default(), progress_every: Some(100_000) }
    }
}

#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: u64,
}
