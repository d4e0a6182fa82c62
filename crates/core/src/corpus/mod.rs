//! Corpus discovery.
//!
//! A corpus directory holds test sources (`test17.c`) next to the reports the
//! detector produced for them (`test17.out`). Directories are visited in the
//! order given and sources within a directory in lexical file-name order, so
//! repeated runs over an unchanged corpus produce identical records.

use std::fs;
use std::path::{Path, PathBuf};

use crate::annotations::extract_annotations;
use crate::error::{EvalError, EvalResult};
use crate::evaluation::Evaluation;
use crate::model::{EvaluationRecord, TestCase};
use crate::reports::load_report;

/// Default corpus directories, relative to the working directory.
pub const DEFAULT_TEST_DIRS: [&str; 3] =
    ["test/int_over_under_flow", "test/CWE_190", "test/more_data_types"];

/// Default extension of test sources.
pub const DEFAULT_SOURCE_EXTENSION: &str = "c";

/// Default extension of detector reports.
pub const DEFAULT_REPORT_EXTENSION: &str = "out";

/// How test sources and their reports are recognized on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLayout {
    pub source_extension: String,
    pub report_extension: String,
}

impl Default for CorpusLayout {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_EXTENSION, DEFAULT_REPORT_EXTENSION)
    }
}

impl CorpusLayout {
    pub fn new(source_extension: impl Into<String>, report_extension: impl Into<String>) -> Self {
        let strip = |ext: String| ext.trim_start_matches('.').to_string();
        Self {
            source_extension: strip(source_extension.into()),
            report_extension: strip(report_extension.into()),
        }
    }

    /// Report path for a given test source (same directory, same stem).
    pub fn report_path_for(&self, source: &Path) -> PathBuf {
        source.with_extension(&self.report_extension)
    }

    fn is_source(&self, path: &Path) -> bool {
        path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some(self.source_extension.as_str())
    }

    /// List test sources directly inside `dir`, sorted by file name.
    ///
    /// A missing directory yields `None`; the caller decides how loudly to
    /// report it.
    pub fn discover_sources(&self, dir: &Path) -> EvalResult<Option<Vec<PathBuf>>> {
        if !dir.is_dir() {
            return Ok(None);
        }

        let entries = fs::read_dir(dir)
            .map_err(|source| EvalError::CorpusRead { path: dir.to_path_buf(), source })?;

        let mut sources = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|source| EvalError::CorpusRead { path: dir.to_path_buf(), source })?;
            let path = entry.path();
            if self.is_source(&path) {
                sources.push(path);
            }
        }

        sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(Some(sources))
    }

    /// Build the evaluation record for a single test source.
    pub fn evaluate_source(&self, source: &Path) -> EvalResult<EvaluationRecord> {
        let name = source
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| source.display().to_string());

        let truth = extract_annotations(source)?;
        let detection = load_report(&self.report_path_for(source))?;

        log::debug!(
            "{}: expected_overflow={}, detections={}",
            name,
            truth.expected_overflow,
            detection.descriptors.len()
        );

        Ok(EvaluationRecord::new(TestCase::new(name, source, truth), detection))
    }

    /// Evaluate every test source in `dir`.
    ///
    /// A missing directory contributes no records and only logs a warning.
    pub fn evaluate_dir(&self, dir: &Path) -> EvalResult<Vec<EvaluationRecord>> {
        let Some(sources) = self.discover_sources(dir)? else {
            log::warn!("Directory {} not found", dir.display());
            return Ok(Vec::new());
        };

        log::debug!("Found {} test sources in {}", sources.len(), dir.display());
        sources.iter().map(|source| self.evaluate_source(source)).collect()
    }

    /// Evaluate all corpus directories, in order, into one pass.
    pub fn evaluate_dirs<P: AsRef<Path>>(&self, dirs: &[P]) -> EvalResult<Evaluation> {
        let mut records = Vec::new();
        for dir in dirs {
            records.extend(self.evaluate_dir(dir.as_ref())?);
        }
        Ok(Evaluation::from_records(records))
    }
}

/// Evaluate corpus directories using the default `.c` / `.out` layout.
pub fn evaluate_corpus<P: AsRef<Path>>(dirs: &[P]) -> EvalResult<Evaluation> {
    CorpusLayout::default().evaluate_dirs(dirs)
}
