use std::{cmp::Ordering, process::ExitCode};

use anstream::println;
use debver::{Relation, Version};
use serde::Serialize;
use tracing::debug;

use super::{OutputFormat, Result, sign};

#[derive(Serialize)]
struct Comparison<'a> {
    a: &'a str,
    b: &'a str,
    result: i8,
}

pub fn compare(a: &str, b: &str, symbol: bool, format: OutputFormat) -> Result<()> {
    let ordering = debver::compare(a, b)?;
    debug!(a, b, ?ordering, "compared versions");

    match format {
        OutputFormat::Text if symbol => println!("{}", symbol_for(ordering)),
        OutputFormat::Text => println!("{}", sign(ordering)),
        OutputFormat::Json => {
            let comparison = Comparison {
                a,
                b,
                result: sign(ordering),
            };
            println!("{}", serde_json::to_string(&comparison)?);
        }
    }

    Ok(())
}

/// Exit status 0 when `a <relation> b` holds and 1 when it does not.
pub fn satisfies(a: &str, relation: Relation, b: &str) -> Result<ExitCode> {
    let holds = Version::new(a)?.satisfies(relation, &Version::new(b)?)?;
    debug!(a, %relation, b, holds, "evaluated relation");

    Ok(if holds {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn symbol_for(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
