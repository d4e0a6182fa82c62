use std::fs;

use overflow_eval_core::annotations::{
    extract_annotations, parse_annotation_lines, parse_annotations,
};
use overflow_eval_core::EvalError;
use tempfile::tempdir;

#[test]
fn file_without_directives_defaults_to_no_overflow() {
    let truth = parse_annotations("#include <stdio.h>\nint main(void) { return 0; }\n");
    assert!(!truth.expected_overflow);
    assert!(truth.annotated_lines.is_empty());
}

#[test]
fn last_directive_wins() {
    let fail_last = "// expect: pass\nint x;\n// expect: fail\n";
    assert!(parse_annotations(fail_last).expected_overflow);

    let pass_last = "// expect: fail\nint x;\n// expect: pass\n";
    assert!(!parse_annotations(pass_last).expected_overflow);
}

#[test]
fn directives_are_case_insensitive() {
    assert!(parse_annotations("// EXPECT: OVERFLOW\n").expected_overflow);
    assert!(parse_annotations("// Expect : Fail\n").expected_overflow);
    assert!(!parse_annotations("// EXPECT: OVERFLOW\n// EXPECT: PASS\n").expected_overflow);
}

#[test]
fn unrecognized_directive_keeps_previous_value() {
    let truth = parse_annotations("// EXPECT: OVERFLOW\n// EXPECT: SAFE\n");
    assert!(truth.expected_overflow);

    let truth = parse_annotations("// EXPECT: SAFE\n");
    assert!(!truth.expected_overflow);
}

#[test]
fn error_lines_are_one_based_and_independent_of_directives() {
    let text = "\
// EXPECT: PASS
short s = 0;
s += 40000; // Error
// expect: fail // error
int y = 1;
y *= 3; // ERROR: multiply
";
    let truth = parse_annotations(text);
    assert!(truth.expected_overflow);
    assert_eq!(truth.annotated_lines.into_iter().collect::<Vec<_>>(), vec![3, 4, 6]);
}

#[test]
fn line_slices_parse_like_text() {
    let lines = ["int a;", "a++; // error", "// expect: overflow"];
    let truth = parse_annotation_lines(lines);
    assert!(truth.expected_overflow);
    assert_eq!(truth.annotated_lines.into_iter().collect::<Vec<_>>(), vec![2]);
}

#[test]
fn extract_reads_from_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("test17.c");
    fs::write(&path, "// EXPECT: OVERFLOW\nx += y; // Error\n").expect("write source");

    let truth = extract_annotations(&path).expect("extract");
    assert!(truth.expected_overflow);
    assert!(truth.annotated_lines.contains(&2));
}

#[test]
fn extract_fails_for_missing_source() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.c");

    match extract_annotations(&path) {
        Err(EvalError::SourceRead { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected SourceRead error, got {other:?}"),
    }
}

#[test]
fn outcome_words_before_the_directive_still_count() {
    let truth = parse_annotations("int overflow_count = 0; // expect: pass\n");
    assert!(truth.expected_overflow);
}
