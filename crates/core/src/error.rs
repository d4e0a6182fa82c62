use std::path::PathBuf;

use thiserror::Error;

/// Error type for corpus evaluation.
///
/// Only I/O failures surface here. Malformed annotations or reports are not
/// errors; they simply fail to match and leave the defaults in place.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A test source file exists but could not be read.
    ///
    /// Ground truth is never defaulted for an unreadable source, so this aborts
    /// the whole run.
    #[error("Failed to read test source {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A detection report exists but could not be read.
    #[error("Failed to read detection report {path}: {source}")]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus directory exists but its entries could not be listed.
    #[error("Failed to read corpus directory {path}: {source}")]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;
