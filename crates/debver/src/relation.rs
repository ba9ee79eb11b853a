use std::{cmp::Ordering, str::FromStr};

use crate::VersionError;

/// Relational operator between two versions, spelled the way
/// `dpkg --compare-versions` accepts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Less,
    LessEqual,
    Equal,
    NotEqual,
    GreaterEqual,
    Greater,
}

impl Relation {
    /// Does a comparison result satisfy this relation?
    pub fn matches(self, ordering: Ordering) -> bool {
        match self {
            Relation::Less => ordering.is_lt(),
            Relation::LessEqual => ordering.is_le(),
            Relation::Equal => ordering.is_eq(),
            Relation::NotEqual => ordering.is_ne(),
            Relation::GreaterEqual => ordering.is_ge(),
            Relation::Greater => ordering.is_gt(),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Less => "<<",
            Relation::LessEqual => "<=",
            Relation::Equal => "=",
            Relation::NotEqual => "!=",
            Relation::GreaterEqual => ">=",
            Relation::Greater => ">>",
        }
    }
}

impl FromStr for Relation {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<<" | "lt" => Ok(Relation::Less),
            "<=" | "le" => Ok(Relation::LessEqual),
            "=" | "eq" => Ok(Relation::Equal),
            "!=" | "ne" => Ok(Relation::NotEqual),
            ">=" | "ge" => Ok(Relation::GreaterEqual),
            ">>" | "gt" => Ok(Relation::Greater),
            other => Err(VersionError::InvalidRelation {
                relation: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
