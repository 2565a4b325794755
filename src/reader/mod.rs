mod csv;

pub use csv::{read_csv, read_csv_file};
