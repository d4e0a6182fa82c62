//! Detection-report parsing.
//!
//! The detector writes one plain-text report per test. Everything after the
//! `Potential Overflow Instructions` header, up to EOF, is a candidate
//! descriptor; blank lines and `Running ...` progress lines are dropped.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{EvalError, EvalResult};
use crate::model::DetectionResult;

/// Header that opens the descriptor section of a report.
pub const OVERFLOW_HEADER: &str = "Potential Overflow Instructions";

const PROGRESS_PREFIX: &str = "Running";

/// Extract the descriptor set from report text.
///
/// Only the first header occurrence opens capture; repeated header lines are
/// skipped, never stored. A report without the header has no detections.
/// Line endings are handled as in [`crate::annotations::parse_annotations`].
pub fn parse_report(text: &str) -> BTreeSet<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = normalized.lines();

    if !lines.by_ref().any(|line| line.contains(OVERFLOW_HEADER)) {
        return BTreeSet::new();
    }

    lines
        .filter(|line| !line.contains(OVERFLOW_HEADER))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(PROGRESS_PREFIX))
        .map(str::to_string)
        .collect()
}

/// Load and parse the report at `path`.
///
/// A missing report is a normal outcome meaning "no detections".
pub fn load_report(path: &Path) -> EvalResult<DetectionResult> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(DetectionResult::new(parse_report(&text))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("No report at {}; treating as no detections", path.display());
            Ok(DetectionResult::empty())
        }
        Err(source) => Err(EvalError::ReportRead { path: path.to_path_buf(), source }),
    }
}
