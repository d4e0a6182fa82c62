use std::io::Write;

use anyhow::Result;
use overflow_eval_core::evaluation::{Evaluation, Metrics, Outcome};

const RULE_WIDTH: usize = 60;

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Write the headline counts and metrics.
pub fn write_summary(out: &mut impl Write, metrics: &Metrics) -> Result<()> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "INTEGER OVERFLOW DETECTION - PRECISION & RECALL")?;
    writeln!(out, "{heavy}")?;
    writeln!(out)?;
    writeln!(out, "Total Tests:        {}", metrics.total)?;
    writeln!(out, "True Positives:     {}", metrics.tp)?;
    writeln!(out, "False Positives:    {}", metrics.fp)?;
    writeln!(out, "True Negatives:     {}", metrics.tn)?;
    writeln!(out, "False Negatives:    {}", metrics.fn_)?;
    writeln!(out)?;
    writeln!(out, "{light}")?;
    writeln!(out, "Precision:          {}", percent(metrics.precision))?;
    writeln!(out, "Recall:             {}", percent(metrics.recall))?;
    writeln!(out, "F1 Score:           {}", percent(metrics.f1))?;
    writeln!(out, "Accuracy:           {}", percent(metrics.accuracy))?;
    writeln!(out, "{light}")?;
    writeln!(out)?;
    Ok(())
}

/// Write per-test results grouped by confusion-matrix cell.
///
/// Empty groups are omitted. False positives list what the detector reported;
/// false negatives list the annotated error lines, if any.
pub fn write_details(out: &mut impl Write, evaluation: &Evaluation) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Detailed Results by Test:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let groups = [
        (Outcome::TruePositive, "\u{2713} TRUE POSITIVES (Correctly detected overflows):"),
        (Outcome::TrueNegative, "\u{2713} TRUE NEGATIVES (Correctly identified no overflow):"),
        (Outcome::FalsePositive, "\u{2717} FALSE POSITIVES (Incorrectly detected overflows):"),
        (Outcome::FalseNegative, "\u{2717} FALSE NEGATIVES (Missed overflows):"),
    ];

    for (outcome, heading) in groups {
        let mut records = evaluation.records_with(outcome).peekable();
        if records.peek().is_none() {
            continue;
        }

        writeln!(out)?;
        writeln!(out, "{heading}")?;
        for record in records {
            let name = record.name();
            let found = record.detection.descriptors.len();
            match outcome {
                Outcome::TruePositive => {
                    writeln!(out, "  {name}: {found} overflow(s) detected")?;
                }
                Outcome::TrueNegative => {
                    writeln!(out, "  {name}: No overflow detected (correct)")?;
                }
                Outcome::FalsePositive => {
                    writeln!(out, "  {name}: {found} overflow(s) detected but none expected")?;
                    for descriptor in &record.detection.descriptors {
                        writeln!(out, "    - {descriptor}")?;
                    }
                }
                Outcome::FalseNegative => {
                    writeln!(out, "  {name}: Expected overflow but none detected")?;
                    let lines = &record.test.annotated_lines;
                    if !lines.is_empty() {
                        let joined =
                            lines.iter().map(|l| l.to_string()).collect::<Vec<_>>().join(", ");
                        writeln!(out, "    Expected errors at lines: [{joined}]")?;
                    }
                }
            }
        }
    }

    writeln!(out)?;
    Ok(())
}

/// Write the metrics as a pretty-printed JSON object.
pub fn write_json(out: &mut impl Write, metrics: &Metrics) -> Result<()> {
    let serialized = serde_json::to_string_pretty(metrics)?;
    writeln!(out, "{serialized}")?;
    Ok(())
}
