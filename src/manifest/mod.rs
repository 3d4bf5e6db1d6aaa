//! Tooth manifest model
//!
//! This module provides the manifest a tooth ships with: its identity,
//! version, dependency constraints, display information and file placement,
//! plus the JSON encoding used for manifests and recorded metadata.

mod dependency;
mod document;
mod model;
mod placement;

pub use dependency::{Constraint, DependencySet};
pub use model::{Information, Manifest};
pub use placement::Placement;
