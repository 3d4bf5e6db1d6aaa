//! Semantic versions and the predicates used to constrain them.
//!
//! Versions are plain [`semver::Version`] values; this module adds
//! [`VersionMatch`], the single predicate that dependency constraints are
//! built from.

mod matcher;

pub use matcher::{Comparison, VersionMatch, VersionMatchError};
pub use semver::Version;
