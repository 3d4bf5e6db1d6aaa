//! Error types shared by the manifest model and the path authority.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::version::VersionMatchError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to decode JSON into metadata: {0}")]
    Decode(#[from] DecodeError),

    #[error("failed to encode metadata into JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot locate home directory; set LIP_HOME to choose the global .lip directory")]
    NoHomeDir,
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Why a manifest was rejected, either while decoding a document or while
/// constructing a [`crate::manifest::Manifest`] directly.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Syntax(#[source] serde_json::Error),

    #[error("invalid tooth path: {0}")]
    InvalidToothPath(String),

    #[error("invalid version {value:?}: {source}")]
    InvalidVersion {
        value: String,
        #[source]
        source: semver::Error,
    },

    #[error("invalid version match {value:?} for dependency {dependency}: {source}")]
    InvalidVersionMatch {
        dependency: String,
        value: String,
        #[source]
        source: VersionMatchError,
    },

    #[error("invalid source: {0}")]
    InvalidSource(String),

    #[error("invalid destination: {0}")]
    InvalidDestination(String),
}
