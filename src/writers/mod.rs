mod options;
mod pipeline;
mod sinks;

pub use options::{CsvOptions, WriteFormat, WriteOptions, WriteReport};
pub use pipeline::{write_file, write_to_writer};
pub use sinks::RecordSink;
