//! Evaluation data model: test cases, detection results, and the records that
//! pair them.
//!
//! All types here are plain values. They are built once per invocation and
//! never mutated after construction.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Ground truth extracted from one test source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundTruth {
    /// Whether the test expects the detector to flag an overflow.
    pub expected_overflow: bool,
    /// 1-based line numbers carrying an `// error` marker.
    pub annotated_lines: BTreeSet<usize>,
}

/// A single test case in the corpus together with its ground truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Test name (the source file stem, e.g. `test17`).
    pub name: String,
    /// Path to the test source file.
    pub source_path: PathBuf,
    pub expected_overflow: bool,
    pub annotated_lines: BTreeSet<usize>,
}

impl TestCase {
    pub fn new(name: impl Into<String>, source_path: impl Into<PathBuf>, truth: GroundTruth) -> Self {
        Self {
            name: name.into(),
            source_path: source_path.into(),
            expected_overflow: truth.expected_overflow,
            annotated_lines: truth.annotated_lines,
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

/// Descriptors the detector reported for one test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Opaque detector output lines, deduplicated.
    pub descriptors: BTreeSet<String>,
}

impl DetectionResult {
    pub fn new(descriptors: BTreeSet<String>) -> Self {
        Self { descriptors }
    }

    /// A result with no detections (used when no report artifact exists).
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the detector flagged anything at all for this test.
    pub fn has_detection(&self) -> bool {
        !self.descriptors.is_empty()
    }
}

/// One test case paired with its detection outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub test: TestCase,
    pub detection: DetectionResult,
}

impl EvaluationRecord {
    pub fn new(test: TestCase, detection: DetectionResult) -> Self {
        Self { test, detection }
    }

    pub fn name(&self) -> &str {
        &self.test.name
    }

    pub fn expected_overflow(&self) -> bool {
        self.test.expected_overflow
    }

    pub fn has_detection(&self) -> bool {
        self.detection.has_detection()
    }
}
