use anyhow::{anyhow, Result};

pub mod commands;
pub mod config;

pub use config::{load_config, resolve_config, CliOverrides, EvalConfig};

/// Log levels accepted by `--log-level` and the `log_level` config key.
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Parse a log level name (case-insensitive).
pub fn parse_log_level(level: &str) -> Result<log::LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Ok(log::LevelFilter::Off),
        "error" => Ok(log::LevelFilter::Error),
        "warn" => Ok(log::LevelFilter::Warn),
        "info" => Ok(log::LevelFilter::Info),
        "debug" => Ok(log::LevelFilter::Debug),
        "trace" => Ok(log::LevelFilter::Trace),
        other => Err(anyhow!("Invalid log level '{}'. Allowed: {}", other, LOG_LEVELS.join(", "))),
    }
}

/// Route `log` records to stderr so stdout only carries the report.
///
/// Only the first call installs a logger; later calls keep it.
pub fn init_logging(level: log::LevelFilter) {
    let applied = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .level(level)
        .chain(std::io::stderr())
        .apply();

    if applied.is_err() {
        log::debug!("Logger already initialized; keeping existing configuration");
    }
}
