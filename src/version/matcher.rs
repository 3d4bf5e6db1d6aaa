//! Version match grammar.
//!
//! | form                | meaning                                 |
//! |---------------------|-----------------------------------------|
//! | `1.2.3`, `=1.2.3`   | exactly 1.2.3                           |
//! | `!=1.2.3`           | anything but 1.2.3                      |
//! | `>1.2.3`, `>=1.2.3` | above (or at) 1.2.3                     |
//! | `<1.2.3`, `<=1.2.3` | below (or at) 1.2.3                     |
//! | `1.x`, `1.2.x`      | any version sharing the fixed tiers     |
//! | `*`                 | any version                             |

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Version;
use thiserror::Error;

/// Operator of a [`VersionMatch::Compare`], ordered by semver precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Comparison {
    // Longest prefixes first so ">=" is not read as ">".
    const PREFIXES: [(&'static str, Comparison); 6] = [
        (">=", Comparison::GreaterOrEqual),
        ("<=", Comparison::LessOrEqual),
        ("!=", Comparison::NotEqual),
        (">", Comparison::Greater),
        ("<", Comparison::Less),
        ("=", Comparison::Equal),
    ];

    fn symbol(self) -> &'static str {
        match self {
            Comparison::Equal => "",
            Comparison::NotEqual => "!=",
            Comparison::Greater => ">",
            Comparison::GreaterOrEqual => ">=",
            Comparison::Less => "<",
            Comparison::LessOrEqual => "<=",
        }
    }

    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Comparison::Equal => ordering == Ordering::Equal,
            Comparison::NotEqual => ordering != Ordering::Equal,
            Comparison::Greater => ordering == Ordering::Greater,
            Comparison::GreaterOrEqual => ordering != Ordering::Less,
            Comparison::Less => ordering == Ordering::Less,
            Comparison::LessOrEqual => ordering != Ordering::Greater,
        }
    }
}

/// A predicate over a single [`Version`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionMatch {
    /// `*`
    Any,
    /// Compare the candidate against a fixed version.
    Compare { op: Comparison, version: Version },
    /// `1.x` or `1.2.x`
    Wildcard { major: u64, minor: Option<u64> },
}

#[derive(Debug, Error)]
pub enum VersionMatchError {
    #[error("empty version match")]
    Empty,

    #[error("missing version after operator in {0:?}")]
    MissingVersion(String),

    #[error("invalid version {value:?}: {source}")]
    InvalidVersion {
        value: String,
        #[source]
        source: semver::Error,
    },

    #[error("invalid wildcard {0:?}, expected a form like 1.x or 1.2.x")]
    InvalidWildcard(String),
}

impl VersionMatch {
    /// Check whether `version` satisfies this predicate.
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            VersionMatch::Any => true,
            VersionMatch::Compare { op, version: bound } => {
                op.accepts(version.cmp_precedence(bound))
            }
            VersionMatch::Wildcard { major, minor } => {
                version.major == *major && minor.is_none_or(|minor| version.minor == minor)
            }
        }
    }
}

impl FromStr for VersionMatch {
    type Err = VersionMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionMatchError::Empty);
        }
        if s == "*" {
            return Ok(VersionMatch::Any);
        }

        let (op, operand) = Comparison::PREFIXES
            .iter()
            .find_map(|(prefix, op)| s.strip_prefix(prefix).map(|rest| (*op, rest.trim())))
            .unwrap_or((Comparison::Equal, s));

        if operand.is_empty() {
            return Err(VersionMatchError::MissingVersion(s.to_string()));
        }

        if op == Comparison::Equal && operand.ends_with(".x") {
            return parse_wildcard(operand);
        }

        let version = Version::parse(operand).map_err(|source| VersionMatchError::InvalidVersion {
            value: operand.to_string(),
            source,
        })?;

        Ok(VersionMatch::Compare { op, version })
    }
}

fn parse_wildcard(s: &str) -> Result<VersionMatch, VersionMatchError> {
    let invalid = || VersionMatchError::InvalidWildcard(s.to_string());
    let tier = |part: &str| part.parse::<u64>().map_err(|_| invalid());

    let parts: Vec<&str> = s.split('.').collect();
    match parts.as_slice() {
        [major, "x"] => Ok(VersionMatch::Wildcard {
            major: tier(major)?,
            minor: None,
        }),
        [major, minor, "x"] => Ok(VersionMatch::Wildcard {
            major: tier(major)?,
            minor: Some(tier(minor)?),
        }),
        _ => Err(invalid()),
    }
}

impl fmt::Display for VersionMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionMatch::Any => f.write_str("*"),
            VersionMatch::Compare { op, version } => write!(f, "{}{}", op.symbol(), version),
            VersionMatch::Wildcard {
                major,
                minor: None,
            } => write!(f, "{}.x", major),
            VersionMatch::Wildcard {
                major,
                minor: Some(minor),
            } => write!(f, "{}.{}.x", major, minor),
        }
    }
}
