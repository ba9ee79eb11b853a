use std::{
    cmp::Ordering,
    io::{self, BufRead},
};

use anstream::println;
use debver::Version;
use tracing::debug;

use super::{OutputFormat, Result};

/// Print versions oldest first. With no arguments, versions are read one per
/// line from stdin.
pub fn sort(
    versions: Vec<String>,
    reverse: bool,
    unique: bool,
    format: OutputFormat,
) -> Result<()> {
    let inputs = if versions.is_empty() {
        read_stdin()?
    } else {
        versions
    };

    let mut versions = sorted(&inputs, reverse)?;
    if unique {
        versions.dedup_by(|a, b| a == b);
    }
    debug!(count = versions.len(), "sorted versions");

    match format {
        OutputFormat::Text => {
            for version in &versions {
                println!("{version}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&versions)?);
        }
    }

    Ok(())
}

fn read_stdin() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Every version is validated before sorting so the comparison is total.
fn sorted(inputs: &[String], reverse: bool) -> Result<Vec<Version>> {
    let mut versions = Vec::with_capacity(inputs.len());
    for input in inputs {
        let version = Version::new(input)?;
        version.validate()?;
        versions.push(version);
    }

    versions.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    if reverse {
        versions.reverse();
    }

    Ok(versions)
}
