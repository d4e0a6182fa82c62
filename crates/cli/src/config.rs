use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use overflow_eval_core::corpus::{
    CorpusLayout, DEFAULT_REPORT_EXTENSION, DEFAULT_SOURCE_EXTENSION, DEFAULT_TEST_DIRS,
};

/// Evaluation settings.
///
/// Every field is optional in a config file; missing fields take the built-in
/// defaults. Precedence is defaults < config file < CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Corpus directories, evaluated in this order.
    pub test_dirs: Vec<String>,
    /// Extension identifying test sources (without the dot).
    pub source_extension: String,
    /// Extension of the detector report next to each source.
    pub report_extension: String,
    /// One of: off, error, warn, info, debug, trace.
    pub log_level: String,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            test_dirs: DEFAULT_TEST_DIRS.iter().map(|d| d.to_string()).collect(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            report_extension: DEFAULT_REPORT_EXTENSION.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl EvalConfig {
    pub fn layout(&self) -> CorpusLayout {
        CorpusLayout::new(&self.source_extension, &self.report_extension)
    }

    /// Apply flags the user actually passed on the command line.
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(dirs) = &overrides.test_dirs {
            if !dirs.is_empty() {
                self.test_dirs = dirs.clone();
            }
        }
        if let Some(level) = &overrides.log_level {
            if !level.trim().is_empty() {
                self.log_level = level.trim().to_string();
            }
        }
    }
}

/// CLI values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub test_dirs: Option<Vec<String>>,
    pub log_level: Option<String>,
}

/// Load an evaluation config from a `.json`, `.yaml` or `.yml` file.
pub fn load_config(path: &Path) -> Result<EvalConfig> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_lowercase();

    let config: EvalConfig = match ext.as_str() {
        "json" => serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse config JSON {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&body)
            .with_context(|| format!("Failed to parse config YAML {}", path.display()))?,
        other => {
            return Err(anyhow!(
                "Unsupported config format '{}' for {}. Allowed: json, yaml, yml",
                other,
                path.display()
            ))
        }
    };
    Ok(config)
}

/// Resolve the effective config: defaults, then the optional file, then flags.
pub fn resolve_config(path: Option<&Path>, overrides: &CliOverrides) -> Result<EvalConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => EvalConfig::default(),
    };
    config.apply_overrides(overrides);
    Ok(config)
}
