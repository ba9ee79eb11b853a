use crate::common::DebverTest;
use indoc::indoc;
use insta::assert_snapshot;

const GOLDEN: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../debver/tests/fixtures/golden.txt"
);

#[test]
fn test_check_golden_table() {
    let test = DebverTest::new();
    let output = test.debver(&["check", GOLDEN]);
    output.assert_success();
    assert_snapshot!(output.stdout().trim_end(), @"64 passed, 0 failed");
    assert!(!output.stderr().contains("FAIL"));
}

#[test]
fn test_check_reports_every_failure() {
    let test = DebverTest::new();
    let table = test.write_file(
        "table.txt",
        indoc! {"
            # two wrong expectations and one bad version
            1.0        1.0-0       1
            2a         21          >
            1.2.3      1.2.4       <
            1.0        1.0_rc1     0
        "},
    );

    let output = test.debver(&["check", table.as_str()]);
    output.assert_failure();
    assert_eq!(output.code(), Some(1));
    assert_snapshot!(output.stdout().trim_end(), @"1 passed, 3 failed");
    assert_snapshot!(output.stderr().trim_end(), @r#"
    FAIL (1.0, 1.0-0) expected: 1, actual: 0
    FAIL (2a, 21) expected: 1, actual: -1
    FAIL (1.0, 1.0_rc1) expected: 0, actual: error: Invalid character '_' in version fragment "1.0_rc1"
    "#);
}

#[test]
fn test_check_malformed_table() {
    let test = DebverTest::new();
    let table = test.write_file("table.txt", "1.0 1.0 0\n1.0 1.0 maybe\n");

    let output = test.debver(&["check", table.as_str()]);
    output.assert_failure();
    assert_eq!(output.code(), Some(2));
    assert!(output.stderr().contains("Malformed line 2"), "{}", output.stderr());
}

#[test]
fn test_check_missing_table() {
    let test = DebverTest::new();
    let output = test.debver(&["check", "does-not-exist.txt"]);
    output.assert_failure();
    assert_eq!(output.code(), Some(2));
    assert!(output.stderr().contains("does-not-exist.txt"));
}
