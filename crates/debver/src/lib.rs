//! Ordering for Debian package versions, `[epoch:]upstream_version[-debian_revision]`.
//!
//! ```
//! use std::cmp::Ordering;
//!
//! assert_eq!(debver::compare("1:1.25-4", "1:1.25-8")?, Ordering::Less);
//! assert_eq!(debver::compare("1.0", "1.0-0~")?, Ordering::Greater);
//! assert_eq!(debver::compare("009", "9")?, Ordering::Equal);
//! # Ok::<(), debver::VersionError>(())
//! ```

use std::cmp::Ordering;

pub mod fragment;
pub mod order;
pub mod relation;
pub mod token;
pub mod version;

pub use fragment::compare_fragments;
pub use order::{compare_text, rank};
pub use relation::Relation;
pub use token::{Number, Token, tokenize};
pub use version::Version;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Invalid epoch {epoch:?} in version {version}")]
    InvalidEpoch { version: String, epoch: String },
    #[error("Invalid character {character:?} in version fragment {fragment:?}")]
    InvalidCharacter { fragment: String, character: char },
    #[error("Invalid version relation {relation:?}, expected one of <<, <=, =, !=, >=, >>")]
    InvalidRelation { relation: String },
}

/// Split a version string into epoch, upstream version and revision.
pub fn parse(version: &str) -> Result<Version, VersionError> {
    Version::new(version)
}

/// Compare two version strings.
pub fn compare(a: &str, b: &str) -> Result<Ordering, VersionError> {
    parse(a)?.compare(&parse(b)?)
}
