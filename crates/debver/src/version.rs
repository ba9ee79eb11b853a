use std::{cmp::Ordering, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};
use tracing::trace;

use crate::{
    VersionError, fragment::compare_fragments, order::validate, relation::Relation,
    token::Number,
};

/// A Debian version, `[epoch:]upstream_version[-debian_revision]`, split into
/// its three components.
///
/// The epoch defaults to 0 and the revision to `"0"` when they are absent, so
/// `1.2.3`, `0:1.2.3` and `1.2.3-0` all compare equal. The original string is
/// kept for display.
#[derive(Debug, Clone, DeserializeFromStr, SerializeDisplay)]
pub struct Version {
    pub version: String,
    pub epoch: Number,
    pub upstream: String,
    pub revision: String,
}

impl Version {
    /// Decompose a version string.
    ///
    /// The epoch is everything before the first `:` and the revision is
    /// everything after the last `-` that follows it. Only the epoch is
    /// checked here; fragment characters are checked when compared.
    pub fn new(version: impl AsRef<str>) -> Result<Self, VersionError> {
        let version = version.as_ref();

        let (epoch, rest) = match version.split_once(':') {
            Some(("", rest)) => (Number::zero(), rest),
            Some((epoch, rest)) => {
                let epoch =
                    Number::from_digits(epoch).ok_or_else(|| VersionError::InvalidEpoch {
                        version: version.to_string(),
                        epoch: epoch.to_string(),
                    })?;
                (epoch, rest)
            }
            None => (Number::zero(), version),
        };

        let (upstream, revision) = rest.rsplit_once('-').unwrap_or((rest, "0"));

        Ok(Self {
            version: version.to_string(),
            epoch,
            upstream: upstream.to_string(),
            revision: revision.to_string(),
        })
    }

    /// Order two versions: epoch first, then upstream version, then revision.
    ///
    /// Both versions are validated in full first, so a character outside the
    /// Debian order is an error whichever component decides.
    pub fn compare(&self, other: &Self) -> Result<Ordering, VersionError> {
        self.validate()?;
        other.validate()?;

        let epoch = self.epoch.cmp(&other.epoch);
        if epoch != Ordering::Equal {
            trace!(a = %self, b = %other, ?epoch, "decided by epoch");
            return Ok(epoch);
        }

        let upstream = compare_fragments(&self.upstream, &other.upstream)?;
        if upstream != Ordering::Equal {
            trace!(a = %self, b = %other, ?upstream, "decided by upstream version");
            return Ok(upstream);
        }

        let revision = compare_fragments(&self.revision, &other.revision)?;
        trace!(a = %self, b = %other, ?revision, "decided by revision");
        Ok(revision)
    }

    /// Does `self <relation> other` hold?
    pub fn satisfies(&self, relation: Relation, other: &Self) -> Result<bool, VersionError> {
        Ok(relation.matches(self.compare(other)?))
    }

    /// Check that both fragments only use characters with a defined order,
    /// so this version can be compared with any other valid version.
    pub fn validate(&self) -> Result<(), VersionError> {
        validate(&self.upstream)?;
        validate(&self.revision)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Version::new(s)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.version)
    }
}

/// Versions with characters outside the Debian order are not equal to
/// anything, including themselves.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Equal))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}
