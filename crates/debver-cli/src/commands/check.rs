use std::{cmp::Ordering, process::ExitCode};

use anstream::{eprintln, println};
use owo_colors::OwoColorize;
use tracing::{debug, info};

use super::sign;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Malformed line {line} in {path}: {content:?}")]
    #[diagnostic(
        code(debver::table),
        help("expected `VERSION_A VERSION_B EXPECTED`, with EXPECTED one of -1, 0, 1, <, =, >")
    )]
    MalformedLine {
        path: String,
        line: usize,
        content: String,
    },
}

type Result<T> = miette::Result<T, Error>;

/// One expected comparison from a golden table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub line: usize,
    pub a: String,
    pub b: String,
    pub expected: Ordering,
}

/// Parse a golden table. Blank lines and lines starting with `#` are skipped.
pub fn parse_table(path: &str, content: &str) -> Result<Vec<Case>> {
    let mut cases = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = || Error::MalformedLine {
            path: path.to_string(),
            line: index + 1,
            content: raw.to_string(),
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [a, b, expected] = fields[..] else {
            return Err(malformed());
        };
        let expected = match expected {
            "-1" | "<" => Ordering::Less,
            "0" | "=" => Ordering::Equal,
            "1" | ">" => Ordering::Greater,
            _ => return Err(malformed()),
        };

        cases.push(Case {
            line: index + 1,
            a: a.to_string(),
            b: b.to_string(),
            expected,
        });
    }

    Ok(cases)
}

/// Run every case and report each mismatch, rather than stopping at the
/// first. Exits with status 1 if any case failed.
pub fn check(path: &str) -> Result<ExitCode> {
    let content = fs_err::read_to_string(path)?;
    let cases = parse_table(path, &content)?;
    info!(path, cases = cases.len(), "running comparison table");

    let mut failed = 0;
    for case in &cases {
        let actual = match debver::compare(&case.a, &case.b) {
            Ok(actual) if actual == case.expected => {
                debug!(line = case.line, "ok");
                continue;
            }
            Ok(actual) => sign(actual).to_string(),
            Err(err) => format!("error: {err}"),
        };

        failed += 1;
        eprintln!(
            "{} ({}, {}) expected: {}, actual: {}",
            "FAIL".red(),
            case.a,
            case.b,
            sign(case.expected),
            actual
        );
    }

    let passed = cases.len() - failed;
    if failed == 0 {
        println!("{} passed, {} failed", passed.green(), failed);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} passed, {} failed", passed, failed.red());
        Ok(ExitCode::FAILURE)
    }
}
