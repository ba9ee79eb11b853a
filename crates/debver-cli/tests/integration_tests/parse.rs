use crate::common::DebverTest;
use insta::assert_snapshot;

#[test]
fn test_parse_text() {
    let test = DebverTest::new();
    let output = test.debver(&["parse", "9:1.18.36:5.4-20"]);
    output.assert_success();
    assert_snapshot!(output.stdout().trim_end(), @r"
    epoch: 9
    upstream: 1.18.36:5.4
    revision: 20
    ");
}

#[test]
fn test_parse_defaults() {
    let test = DebverTest::new();
    let output = test.debver(&["parse", "1.2.3"]);
    output.assert_success();
    assert_snapshot!(output.stdout().trim_end(), @r"
    epoch: 0
    upstream: 1.2.3
    revision: 0
    ");
}

#[test]
fn test_parse_json() {
    let test = DebverTest::new();
    let output = test.debver(&["parse", "--format", "json", "7:1-a:b-5"]);
    output.assert_success();
    assert_snapshot!(output.stdout().trim_end(), @r#"
    {
      "version": "7:1-a:b-5",
      "epoch": "7",
      "upstream": "1-a:b",
      "revision": "5"
    }
    "#);
}

#[test]
fn test_parse_invalid_epoch() {
    let test = DebverTest::new();
    let output = test.debver(&["parse", "1a:2"]);
    output.assert_failure();
    assert_eq!(output.code(), Some(2));
    assert!(output.stderr().contains("Invalid epoch"));
}
