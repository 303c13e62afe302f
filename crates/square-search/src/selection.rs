//! Choosing one square out of the ordered result set

use crate::predicate::Assessment;
use crate::square::Square;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// How the orchestrator picks its single answer from all matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selection {
    /// Last match in enumeration order
    ///
    /// The earliest matches are the seed square and its close relatives,
    /// so the last one is the most distant from it.
    #[default]
    Last,

    /// Highest [`Assessment::magic_score`]; ties go to the later match
    MostMagic,
}

impl Selection {
    /// Pick from `matches`, which must be in enumeration order
    #[must_use]
    pub fn pick<'a>(&self, matches: &'a [Square]) -> Option<&'a Square> {
        match self {
            Self::Last => matches.last(),
            // max_by_key keeps the last of equally ranked elements
            Self::MostMagic => matches
                .iter()
                .max_by_key(|square| Assessment::of(square).magic_score()),
        }
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Last => f.write_str("last"),
            Self::MostMagic => f.write_str("most-magic"),
        }
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last" => Ok(Self::Last),
            "most-magic" => Ok(Self::MostMagic),
            other => Err(format!(
                "unknown selection '{other}', expected 'last' or 'most-magic'"
            )),
        }
    }
}
