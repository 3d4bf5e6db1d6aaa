//! On-disk JSON shape of a manifest.
//!
//! Decoding goes through these typed records first, so a missing or
//! mistyped field is reported by serde with its name and position before
//! any domain validation runs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::DecodeError;
use crate::version::{Version, VersionMatch};

use super::{Constraint, DependencySet, Information, Manifest, Placement};

#[derive(Serialize, Deserialize, Debug)]
pub(super) struct ManifestDocument {
    tooth: String,
    version: String,
    dependencies: BTreeMap<String, Vec<Vec<String>>>,
    information: InformationDocument,
    placement: Vec<PlacementDocument>,
}

#[derive(Serialize, Deserialize, Debug)]
struct InformationDocument {
    name: String,
    description: String,
    author: String,
    license: String,
    homepage: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct PlacementDocument {
    source: String,
    destination: String,
}

impl ManifestDocument {
    pub(super) fn into_manifest(self) -> Result<Manifest, DecodeError> {
        // Tooth path is validated up front so it is the first error reported.
        let tooth_path = self.tooth.to_lowercase();
        if !crate::tooth::is_valid_tooth_path(&tooth_path) {
            return Err(DecodeError::InvalidToothPath(tooth_path));
        }

        let version =
            Version::parse(&self.version).map_err(|source| DecodeError::InvalidVersion {
                value: self.version.clone(),
                source,
            })?;

        let mut dependencies = DependencySet::new();
        for (dependency, groups) in self.dependencies {
            let groups = groups
                .into_iter()
                .map(|group| {
                    group
                        .into_iter()
                        .map(|value| parse_match(&dependency, value))
                        .collect::<Result<Vec<_>, _>>()
                })
                .collect::<Result<Vec<_>, _>>()?;
            dependencies.insert(dependency, Constraint::new(groups));
        }

        let information = Information::from(self.information);

        let placement = self
            .placement
            .into_iter()
            .map(|p| Placement::new(p.source, p.destination))
            .collect::<Result<Vec<_>, _>>()?;

        Manifest::new(&tooth_path, version, dependencies, information, placement)
    }
}

fn parse_match(dependency: &str, value: String) -> Result<VersionMatch, DecodeError> {
    value
        .parse()
        .map_err(|source| DecodeError::InvalidVersionMatch {
            dependency: dependency.to_string(),
            value,
            source,
        })
}

impl From<InformationDocument> for Information {
    fn from(doc: InformationDocument) -> Self {
        Information {
            name: doc.name,
            description: doc.description,
            author: doc.author,
            license: doc.license,
            homepage: doc.homepage,
        }
    }
}

impl From<&Manifest> for ManifestDocument {
    fn from(manifest: &Manifest) -> Self {
        let dependencies = manifest
            .dependencies()
            .iter()
            .map(|(path, constraint)| {
                let groups = constraint
                    .groups()
                    .iter()
                    .map(|group| group.iter().map(VersionMatch::to_string).collect())
                    .collect();
                (path.to_string(), groups)
            })
            .collect();

        let info = manifest.information();

        ManifestDocument {
            tooth: manifest.tooth_path().to_string(),
            version: manifest.version().to_string(),
            dependencies,
            information: InformationDocument {
                name: info.name.clone(),
                description: info.description.clone(),
                author: info.author.clone(),
                license: info.license.clone(),
                homepage: info.homepage.clone(),
            },
            placement: manifest
                .placement()
                .iter()
                .map(|p| PlacementDocument {
                    source: p.source().to_string(),
                    destination: p.destination().to_string(),
                })
                .collect(),
        }
    }
}
