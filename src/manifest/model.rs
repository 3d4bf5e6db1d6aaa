//! The validated, immutable tooth manifest.

use std::path::Path;

use crate::error::{DecodeError, Error, Result};
use crate::runtime::Runtime;
use crate::tooth::is_valid_tooth_path;
use crate::version::Version;

use super::document::ManifestDocument;
use super::{DependencySet, Placement};

/// Display metadata. Carried verbatim, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Information {
    pub name: String,
    pub description: String,
    pub author: String,
    pub license: String,
    pub homepage: String,
}

/// Everything a tooth declares about itself.
///
/// Only constructible through [`Manifest::new`] and [`Manifest::decode`], so
/// every value in circulation has a lower-case valid tooth path and valid
/// placement tokens. To change a field, build a new manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    tooth_path: String,
    version: Version,
    dependencies: DependencySet,
    information: Information,
    placement: Vec<Placement>,
}

impl Manifest {
    /// Build a manifest, lower-casing and validating `tooth_path`.
    pub fn new(
        tooth_path: &str,
        version: Version,
        dependencies: DependencySet,
        information: Information,
        placement: Vec<Placement>,
    ) -> Result<Self, DecodeError> {
        let tooth_path = tooth_path.to_lowercase();
        if !is_valid_tooth_path(&tooth_path) {
            return Err(DecodeError::InvalidToothPath(tooth_path));
        }

        Ok(Self {
            tooth_path,
            version,
            dependencies,
            information,
            placement,
        })
    }

    /// Decode and validate a JSON manifest document.
    ///
    /// Stops at the first invalid field.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let document: ManifestDocument =
            serde_json::from_slice(bytes).map_err(DecodeError::Syntax)?;
        Ok(document.into_manifest()?)
    }

    /// Encode as pretty-printed JSON with 2-space indentation.
    ///
    /// `<`, `>`, `&`, U+2028 and U+2029 are written literally.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let document = ManifestDocument::from(self);
        let mut bytes = serde_json::to_vec_pretty(&document).map_err(Error::Encode)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Read and decode a recorded manifest.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let bytes = runtime.read(path).map_err(|e| Error::io(path, e))?;
        Self::decode(&bytes)
    }

    /// Encode and write this manifest to `path`.
    #[tracing::instrument(skip(self, runtime), fields(tooth = %self.tooth_path))]
    pub fn save<R: Runtime>(&self, runtime: &R, path: &Path) -> Result<()> {
        let bytes = self.encode()?;
        runtime.write(path, &bytes).map_err(|e| Error::io(path, e))
    }

    pub fn tooth_path(&self) -> &str {
        &self.tooth_path
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.dependencies
    }

    pub fn information(&self) -> &Information {
        &self.information
    }

    pub fn placement(&self) -> &[Placement] {
        &self.placement
    }
}
