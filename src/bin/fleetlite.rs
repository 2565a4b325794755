use clap::{Parser, Subcommand};
use fleetlite::cli as prog_cli;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct AppConfig {
    default_vehicles: Option<u32>,
    default_format: Option<String>,
    log_config: Option<PathBuf>,
}

fn load_config(cli_cfg: Option<PathBuf>) -> AppConfig {
    // Precedence: CLI > env > config files > defaults
    let mut cfg = AppConfig::default();
    let mut paths: Vec<PathBuf> = vec![];
    if let Some(p) = &cli_cfg {
        paths.push(p.clone());
    }
    if let Ok(p) = std::env::var("FLEETLITE_CONFIG") {
        paths.push(PathBuf::from(p));
    }
    if let Ok(home) = std::env::var("USERPROFILE").or_else(|_| std::env::var("HOME")) {
        let home_pb = PathBuf::from(home);
        paths.push(home_pb.join(".fleetliterc"));
        paths.push(home_pb.join(".config").join("fleetlite.toml"));
    }
    if let Ok(cur) = std::env::current_dir() {
        paths.push(cur.join("fleetlite.toml"));
    }
    for p in paths {
        if p.exists()
            && let Ok(s) = std::fs::read_to_string(&p)
            && let Ok(file_cfg) = toml::from_str::<AppConfig>(&s)
        {
            if cfg.default_vehicles.is_none() {
                cfg.default_vehicles = file_cfg.default_vehicles;
            }
            if cfg.default_format.is_none() {
                cfg.default_format = file_cfg.default_format;
            }
            if cfg.log_config.is_none() {
                cfg.log_config = file_cfg.log_config;
            }
        }
    }
    if cfg.default_vehicles.is_none()
        && let Ok(s) = std::env::var("FLEETLITE_VEHICLES")
        && let Ok(n) = s.parse()
    {
        cfg.default_vehicles = Some(n);
    }
    if cfg.default_format.is_none()
        && let Ok(s) = std::env::var("FLEETLITE_FORMAT")
    {
        cfg.default_format = Some(s);
    }
    if cfg.log_config.is_none()
        && let Ok(s) = std::env::var("FLEETLITE_LOG_CONFIG")
    {
        cfg.log_config = Some(PathBuf::from(s));
    }
    cfg
}

#[derive(Parser, Debug)]
#[command(
    name = "fleetlite",
    version,
    about = "Fleet telemetry data generator and parse benchmark",
    long_about = None
)]
struct Cli {
    /// Path to a config file (TOML)
    #[arg(long, help = "Path to a config file (TOML). If omitted, defaults are used.")]
    config: Option<PathBuf>,
    #[arg(
        long,
        value_parser = ["human", "plain", "json"],
        default_value = "human",
        help = "Output mode for command results"
    )]
    output_mode: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Generate synthetic telemetry records (CSV/JSON/log)")]
    Generate {
        #[arg(short = 'n', long, default_value_t = 10_000, help = "Number of records to generate")]
        records: u64,
        #[arg(
            short = 'v',
            long,
            help = "Number of vehicles in the pool; falls back to default_vehicles from config"
        )]
        vehicles: Option<u32>,
        #[arg(short = 'f', long, help = "Output format: csv|json|log|all; defaults to csv")]
        format: Option<String>,
        #[arg(
            short = 'o',
            long,
            default_value = "telemetry",
            help = "Output base filename; the format extension is added per file"
        )]
        output: PathBuf,
        #[arg(long, help = "Seed for reproducible output; omitted seeds from the OS")]
        seed: Option<u64>,
        #[arg(long, help = "Upper bound of the per-sample odometer increment in km")]
        drift_max: Option<f64>,
        #[arg(short = 'b', long, help = "Time re-parsing the generated CSV afterwards")]
        benchmark: bool,
    },
    #[command(about = "Parse a delimited telemetry file and print timing as JSON")]
    Bench {
        #[arg(help = "Path to a CSV telemetry file")]
        file: Option<PathBuf>,
        #[arg(long, default_value_t = 3, help = "Number of timed parse iterations to average over")]
        iterations: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    let cfg = load_config(cli.config.clone());
    let log_ready = match &cfg.log_config {
        Some(p) => fleetlite::logger::init_file(p),
        None => fleetlite::init(),
    };
    if let Err(e) = log_ready {
        eprintln!("warning: logging unavailable: {e}");
    }
    let mode = match cli.output_mode.as_str() {
        "json" => prog_cli::OutputMode::Json,
        "plain" => prog_cli::OutputMode::Plain,
        _ => prog_cli::OutputMode::Human,
    };
    let cmd = match cli.command {
        Commands::Generate { records, vehicles, format, output, seed, drift_max, benchmark } => {
            prog_cli::Command::Generate {
                records,
                vehicles: vehicles.or(cfg.default_vehicles).unwrap_or(10),
                format: format.or(cfg.default_format),
                output,
                seed,
                drift_max,
                benchmark,
            }
        }
        Commands::Bench { file, iterations } => prog_cli::Command::Bench { file, iterations },
    };
    if let Err(e) = prog_cli::run_with_format(cmd, mode) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
