mod check;
mod common;
mod parse;

use crate::common::DebverTest;

#[test]
fn test_no_command() {
    let test = DebverTest::new();
    let result = test.debver(&[]);
    result.assert_failure();
    assert_eq!(result.code(), Some(2));
    assert!(result.stderr().contains("Usage:"));
}

#[test]
fn test_help_lists_commands() {
    let test = DebverTest::new();
    let result = test.debver(&["--help"]);
    result.assert_success();
    let stdout = result.stdout();
    for command in ["compare", "satisfies", "parse", "sort", "check"] {
        assert!(stdout.contains(command), "--help should mention {command}");
    }
}
