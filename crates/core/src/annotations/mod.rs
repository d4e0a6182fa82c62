//! Ground-truth extraction from annotated test sources.
//!
//! Test files carry their expected outcome in comments:
//!
//! ```c
//! // EXPECT: OVERFLOW
//! bytesRec += getFromInput(buf + bytesRec); // Error
//! ```
//!
//! Matching is case-insensitive and substring-based. An `expect` directive
//! mentioning `fail` or `overflow` marks the test as expecting a detection,
//! one mentioning `pass` marks it as clean, and the last directive in the
//! file wins. Every `// error` line is recorded independently.

use std::fs;
use std::path::Path;

use crate::error::{EvalError, EvalResult};
use crate::model::GroundTruth;

/// Directive spellings, already lowercased.
const EXPECT_DIRECTIVES: [&str; 2] = ["// expect:", "// expect :"];
const ERROR_MARKER: &str = "// error";

/// Parse ground truth from the full text of a test source.
///
/// `\r\n`, `\n` and a lone `\r` all end a line.
pub fn parse_annotations(text: &str) -> GroundTruth {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    parse_annotation_lines(normalized.lines())
}

/// Parse ground truth from an ordered sequence of lines (line 1 first).
pub fn parse_annotation_lines<'a, I>(lines: I) -> GroundTruth
where
    I: IntoIterator<Item = &'a str>,
{
    let mut truth = GroundTruth::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let lower = line.to_lowercase();

        if let Some(expected) = directive_value(&lower) {
            truth.expected_overflow = expected;
        }

        if lower.contains(ERROR_MARKER) {
            truth.annotated_lines.insert(idx + 1);
        }
    }

    truth
}

/// Read a test source from disk and extract its ground truth.
///
/// Unreadable sources are fatal: ground truth is never assumed.
pub fn extract_annotations(path: &Path) -> EvalResult<GroundTruth> {
    let text = fs::read_to_string(path)
        .map_err(|source| EvalError::SourceRead { path: path.to_path_buf(), source })?;
    Ok(parse_annotations(&text))
}

/// Interpret an `expect` directive on an already-lowercased line.
///
/// Outcome words are matched anywhere on a line that carries a directive.
/// `None` means the line has no directive, or a directive naming no known
/// outcome; either way the previous value stands.
fn directive_value(lower: &str) -> Option<bool> {
    if !EXPECT_DIRECTIVES.iter().any(|d| lower.contains(d)) {
        return None;
    }

    if lower.contains("fail") || lower.contains("overflow") {
        Some(true)
    } else if lower.contains("pass") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_spellings_are_recognized() {
        assert_eq!(directive_value("// expect: overflow"), Some(true));
        assert_eq!(directive_value("// expect : fail"), Some(true));
        assert_eq!(directive_value("// expect: pass"), Some(false));
        assert_eq!(directive_value("// expect: safe"), None);
        assert_eq!(directive_value("/* expect: fail */"), None);
    }

    #[test]
    fn outcome_words_count_anywhere_on_a_directive_line() {
        assert_eq!(directive_value("int overflow_count = 0; // expect: pass"), Some(true));
        assert_eq!(directive_value("pass_through(x); // expect: safe"), Some(false));
        assert_eq!(directive_value("int overflow_count = 0;"), None);
    }

    #[test]
    fn lone_carriage_returns_end_lines() {
        let truth = parse_annotations("// expect: fail\rint a;\ra++; // error\r\nb--; // error\n");
        assert!(truth.expected_overflow);
        assert_eq!(truth.annotated_lines.into_iter().collect::<Vec<_>>(), vec![3, 4]);
    }
}
