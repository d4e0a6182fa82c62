use std::collections::BTreeSet;
use std::fs;

use overflow_eval_core::reports::{load_report, parse_report, OVERFLOW_HEADER};
use overflow_eval_core::EvalError;
use tempfile::tempdir;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn descriptors_follow_header_until_eof() {
    let text = "Potential Overflow Instructions\nfoo\nRunning bar\n\nbaz\n";
    assert_eq!(parse_report(text), set(&["foo", "baz"]));
}

#[test]
fn duplicate_descriptors_collapse() {
    let text = format!("{OVERFLOW_HEADER}\n  %1 = add i32 %a, 1\n%1 = add i32 %a, 1\t\n");
    assert_eq!(parse_report(&text), set(&["%1 = add i32 %a, 1"]));
}

#[test]
fn only_first_header_opens_capture() {
    let text = format!("{OVERFLOW_HEADER}\nfirst\n{OVERFLOW_HEADER}\nsecond\n");
    let found = parse_report(&text);
    assert_eq!(found, set(&["first", "second"]));
    assert!(!found.contains(OVERFLOW_HEADER));
}

#[test]
fn repeated_header_alone_is_no_detection() {
    let text = format!("{OVERFLOW_HEADER}\n{OVERFLOW_HEADER}:\n\n");
    assert!(parse_report(&text).is_empty());
}

#[test]
fn missing_report_is_no_detection() {
    let dir = tempdir().expect("tempdir");
    let result = load_report(&dir.path().join("test1.out")).expect("missing report is not an error");
    assert!(result.descriptors.is_empty());
    assert!(!result.has_detection());
}

#[test]
fn report_on_disk_is_parsed() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("test2.out");
    fs::write(&path, "Running OverflowAnalysis\nPotential Overflow Instructions:\n  %inc = add nsw i16\n")
        .expect("write report");

    let result = load_report(&path).expect("load");
    assert!(result.has_detection());
    assert_eq!(result.descriptors, set(&["%inc = add nsw i16"]));
}

#[test]
fn report_path_that_is_a_directory_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("test3.out");
    fs::create_dir(&path).expect("mkdir");

    match load_report(&path) {
        Err(EvalError::ReportRead { .. }) => {}
        other => panic!("expected ReportRead error, got {other:?}"),
    }
}

#[test]
fn carriage_return_line_endings_are_split() {
    let text = format!("Running OverflowAnalysis\r{OVERFLOW_HEADER}\r\n%a = add\r%b = mul\r\n");
    assert_eq!(parse_report(&text), set(&["%a = add", "%b = mul"]));
}
