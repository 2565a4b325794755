mod options;
mod stream;

pub use options::{DRIFT_COARSE, DRIFT_FINE, GeneratorOptions};
pub use stream::RecordStream;
