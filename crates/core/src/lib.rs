//! overflow-eval-core
//!
//! Core library for scoring a static overflow detector against annotated test
//! corpora.
//!
//! This crate defines the evaluation data model, the ground-truth annotation
//! extractor, the detection-report parser, corpus discovery, and the
//! confusion-matrix engine that turns paired results into precision, recall,
//! F1 and accuracy.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends. The detector itself is never run; only
//! the artifacts it already produced are read.

pub mod annotations;
pub mod corpus;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod reports;

pub use error::{EvalError, EvalResult};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
