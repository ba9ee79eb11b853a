use anstream::println;
use debver::Version;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::{OutputFormat, Result};

#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Components {
    version: String,
    epoch: String,
    upstream: String,
    revision: String,
}

impl From<Version> for Components {
    fn from(version: Version) -> Self {
        Self {
            epoch: version.epoch.to_string(),
            version: version.version,
            upstream: version.upstream,
            revision: version.revision,
        }
    }
}

pub fn parse(version: &str, format: OutputFormat) -> Result<()> {
    let components = Components::from(debver::parse(version)?);

    match format {
        OutputFormat::Text => {
            println!("epoch: {}", components.epoch.cyan());
            println!("upstream: {}", components.upstream.cyan());
            println!("revision: {}", components.revision.cyan());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&components)?);
        }
    }

    Ok(())
}
