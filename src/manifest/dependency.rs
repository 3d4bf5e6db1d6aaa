//! Dependency constraints: per-dependency OR-of-AND lists of version matches.

use std::collections::BTreeMap;

use crate::version::{Version, VersionMatch};

/// Acceptable versions of one dependency.
///
/// The outer list holds alternative groups; a version is acceptable when it
/// satisfies every match of at least one group. No groups means no version
/// is acceptable, while an empty group accepts everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constraint {
    groups: Vec<Vec<VersionMatch>>,
}

impl Constraint {
    /// Build from alternative groups, keeping their order.
    pub fn new(groups: Vec<Vec<VersionMatch>>) -> Self {
        Self { groups }
    }

    /// The alternative groups, in declaration order.
    pub fn groups(&self) -> &[Vec<VersionMatch>] {
        &self.groups
    }

    /// Whether `version` satisfies every match of at least one group.
    pub fn is_satisfied_by(&self, version: &Version) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(|m| m.matches(version)))
    }
}

impl From<Vec<Vec<VersionMatch>>> for Constraint {
    fn from(groups: Vec<Vec<VersionMatch>>) -> Self {
        Self::new(groups)
    }
}

/// Constraints keyed by dependency tooth path.
///
/// Keys are kept sorted so that encoding is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencySet {
    constraints: BTreeMap<String, Constraint>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the constraint for `path`, returning any constraint it replaces.
    pub fn insert(&mut self, path: impl Into<String>, constraint: Constraint) -> Option<Constraint> {
        self.constraints.insert(path.into(), constraint)
    }

    /// The declared constraint for `path`, if any.
    pub fn get(&self, path: &str) -> Option<&Constraint> {
        self.constraints.get(path)
    }

    /// Whether `version` of `path` is acceptable.
    ///
    /// Returns false when `path` has no declared constraint; use [`Self::get`]
    /// to tell an undeclared dependency from an unsatisfied one.
    pub fn satisfies(&self, path: &str, version: &Version) -> bool {
        self.get(path)
            .is_some_and(|constraint| constraint.is_satisfied_by(version))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Constraint)> {
        self.constraints.iter().map(|(path, c)| (path.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Constraint)> for DependencySet {
    fn from_iter<I: IntoIterator<Item = (K, Constraint)>>(iter: I) -> Self {
        Self {
            constraints: iter.into_iter().map(|(k, c)| (k.into(), c)).collect(),
        }
    }
}
