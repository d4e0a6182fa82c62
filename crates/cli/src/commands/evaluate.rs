use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use overflow_eval_core::evaluation::Evaluation;

use crate::commands::{write_details, write_json, write_summary};
use crate::config::EvalConfig;

/// How the evaluation result is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable summary, optionally with the per-test breakdown.
    Text { verbose: bool },
    /// Fixed-shape metrics object.
    Json,
}

/// Evaluate every corpus directory named in `config`.
pub fn run_evaluation(config: &EvalConfig) -> Result<Evaluation> {
    let dirs: Vec<PathBuf> = config.test_dirs.iter().map(PathBuf::from).collect();
    log::debug!("Evaluating {} corpus directories", dirs.len());

    config.layout().evaluate_dirs(&dirs).context("Failed to evaluate test corpus")
}

/// Render an evaluation in the requested mode.
pub fn render_evaluation(
    out: &mut impl Write,
    evaluation: &Evaluation,
    mode: OutputMode,
) -> Result<()> {
    let metrics = evaluation.metrics();
    match mode {
        OutputMode::Json => write_json(out, &metrics),
        OutputMode::Text { verbose } => {
            write_summary(out, &metrics)?;
            if verbose {
                write_details(out, evaluation)?;
            }
            Ok(())
        }
    }
}

/// Evaluate, print the report to stdout, and return whether the detector
/// scored non-zero precision and recall.
pub fn evaluate_command(config: &EvalConfig, mode: OutputMode) -> Result<bool> {
    let evaluation = run_evaluation(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_evaluation(&mut out, &evaluation, mode)?;
    out.flush().context("Failed to flush report")?;

    Ok(evaluation.metrics().is_acceptable())
}
