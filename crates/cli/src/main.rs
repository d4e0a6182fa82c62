use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use overflow_eval::commands::{evaluate_command, OutputMode};
use overflow_eval::{init_logging, parse_log_level, resolve_config, CliOverrides};

/// Precision and recall calculator for overflow detection.
///
/// Reads ground-truth annotations from each test source and compares them with
/// the report the detector left next to it. This CLI is a thin wrapper around
/// `overflow-eval-core`; all scoring logic lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "overflow-eval",
    version,
    about = "Calculate precision and recall for overflow detection",
    long_about = None
)]
struct Cli {
    /// Test directories to analyze.
    ///
    /// Defaults to test/int_over_under_flow, test/CWE_190 and
    /// test/more_data_types unless a config file says otherwise.
    #[arg(long = "test-dirs", num_args = 1.., value_name = "DIR")]
    test_dirs: Option<Vec<String>>,

    /// Show detailed per-test results.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Output results in JSON format.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Optional evaluation config (.json, .yaml or .yml).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Logging level: off, error, warn, info, debug, trace.
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let overrides = CliOverrides { test_dirs: cli.test_dirs, log_level: cli.log_level };
    let config = resolve_config(cli.config.as_deref(), &overrides)?;
    init_logging(parse_log_level(&config.log_level)?);

    let mode = if cli.json { OutputMode::Json } else { OutputMode::Text { verbose: cli.verbose } };
    let acceptable = evaluate_command(&config, mode)?;

    Ok(if acceptable { ExitCode::SUCCESS } else { ExitCode::from(1) })
}
