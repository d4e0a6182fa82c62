use overflow_eval_core::model::{DetectionResult, EvaluationRecord, GroundTruth, TestCase};
use overflow_eval_core::version;

#[test]
fn version_is_non_empty() {
    let v = version();
    assert!(!v.is_empty());
}

#[test]
fn test_case_takes_ground_truth() {
    let truth = GroundTruth { expected_overflow: true, annotated_lines: [3, 9].into() };
    let case = TestCase::new("test17", "corpus/test17.c", truth);
    assert_eq!(case.name, "test17");
    assert!(case.expected_overflow);
    assert_eq!(case.annotated_lines.iter().copied().collect::<Vec<_>>(), vec![3, 9]);
    assert_eq!(case.source_path().to_string_lossy(), "corpus/test17.c");
}

#[test]
fn empty_detection_has_no_detection() {
    let record = EvaluationRecord::new(
        TestCase::new("t", "t.c", GroundTruth::default()),
        DetectionResult::empty(),
    );
    assert!(!record.has_detection());
    assert!(!record.expected_overflow());
    assert_eq!(record.name(), "t");
}
