use std::path::PathBuf;

pub enum Command {
    // Record generation
    Generate {
        records: u64,
        vehicles: u32,
        format: Option<String>,
        output: PathBuf,
        seed: Option<u64>,
        drift_max: Option<f64>,
        benchmark: bool,
    },
    // Parse timing
    Bench {
        file: Option<PathBuf>,
        iterations: u32,
    },
}
