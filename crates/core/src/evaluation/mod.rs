//! Classification and metrics.
//!
//! Each [`EvaluationRecord`] lands in exactly one cell of a 2x2 confusion
//! matrix based on whether an overflow was expected and whether the detector
//! reported anything. Scoring is whole-test: descriptor content and annotated
//! line numbers are carried for reporting only.

use serde::{Deserialize, Serialize};

use crate::model::EvaluationRecord;

/// Confusion-matrix cell for one test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    TruePositive,
    FalsePositive,
    TrueNegative,
    FalseNegative,
}

impl Outcome {
    /// Classify a test from its expected label and detection flag.
    pub fn classify(expected_overflow: bool, has_detection: bool) -> Self {
        match (expected_overflow, has_detection) {
            (true, true) => Outcome::TruePositive,
            (false, true) => Outcome::FalsePositive,
            (false, false) => Outcome::TrueNegative,
            (true, false) => Outcome::FalseNegative,
        }
    }

    pub fn of(record: &EvaluationRecord) -> Self {
        Self::classify(record.expected_overflow(), record.has_detection())
    }
}

/// TP/FP/TN/FN counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub tp: u64,
    pub fp: u64,
    pub tn: u64,
    #[serde(rename = "fn")]
    pub fn_: u64,
}

impl ConfusionMatrix {
    pub fn new(tp: u64, fp: u64, tn: u64, fn_: u64) -> Self {
        Self { tp, fp, tn, fn_ }
    }

    /// Count one classified test.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::TruePositive => self.tp += 1,
            Outcome::FalsePositive => self.fp += 1,
            Outcome::TrueNegative => self.tn += 1,
            Outcome::FalseNegative => self.fn_ += 1,
        }
    }

    /// Fold a stream of records into a fresh matrix.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a EvaluationRecord>,
    {
        records.into_iter().fold(Self::default(), |mut matrix, record| {
            matrix.record(Outcome::of(record));
            matrix
        })
    }

    pub fn total(&self) -> u64 {
        self.tp + self.fp + self.tn + self.fn_
    }

    pub fn precision(&self) -> f64 {
        ratio(self.tp, self.tp + self.fp)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }

    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        }
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.tp + self.tn, self.total())
    }

    /// Snapshot counts and derived metrics.
    pub fn metrics(&self) -> Metrics {
        Metrics {
            tp: self.tp,
            fp: self.fp,
            tn: self.tn,
            fn_: self.fn_,
            total: self.total(),
            precision: self.precision(),
            recall: self.recall(),
            f1: self.f1(),
            accuracy: self.accuracy(),
        }
    }
}

/// Zero when the denominator is zero, never NaN.
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Fixed-shape metrics snapshot.
///
/// Serializes to exactly the keys `tp, fp, tn, fn, total, precision, recall,
/// f1, accuracy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub tp: u64,
    pub fp: u64,
    pub tn: u64,
    #[serde(rename = "fn")]
    pub fn_: u64,
    pub total: u64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
}

impl Metrics {
    /// The detector is usable only when it both finds something and is right
    /// at least once.
    pub fn is_acceptable(&self) -> bool {
        self.precision > 0.0 && self.recall > 0.0
    }
}

/// Result of one evaluation pass over a corpus.
///
/// Records keep the order they were supplied in, so a deterministic corpus
/// walk gives a deterministic report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    records: Vec<EvaluationRecord>,
    matrix: ConfusionMatrix,
}

impl Evaluation {
    pub fn from_records(records: Vec<EvaluationRecord>) -> Self {
        let matrix = ConfusionMatrix::from_records(&records);
        log::info!(
            "Evaluated {} tests (tp={}, fp={}, tn={}, fn={})",
            matrix.total(),
            matrix.tp,
            matrix.fp,
            matrix.tn,
            matrix.fn_
        );
        Self { records, matrix }
    }

    pub fn records(&self) -> &[EvaluationRecord] {
        &self.records
    }

    pub fn matrix(&self) -> ConfusionMatrix {
        self.matrix
    }

    pub fn metrics(&self) -> Metrics {
        self.matrix.metrics()
    }

    /// Records classified as `outcome`, in evaluation order.
    pub fn records_with(&self, outcome: Outcome) -> impl Iterator<Item = &EvaluationRecord> + '_ {
        self.records.iter().filter(move |record| Outcome::of(record) == outcome)
    }
}
