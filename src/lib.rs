pub mod config;
pub mod error;
pub mod manifest;
pub mod paths;
pub mod runtime;
pub mod tooth;
pub mod version;

pub use config::Config;
pub use error::{DecodeError, Error, Result};
pub use manifest::{Constraint, DependencySet, Information, Manifest, Placement};
pub use paths::{Layout, PathAuthority};
pub use version::{Version, VersionMatch};
