//! Pure path computation for the cache and the workspace.

use std::path::{Path, PathBuf};

use crate::runtime::absolute_path;

use super::escape_key;

const CACHE_DIR: &str = "cache";
const WORKSPACE_DOT_DIR: &str = ".lip";
const METADATA_DIR: &str = "metadata";
const PLUGIN_DIR: &str = "plugins";
const METADATA_EXTENSION: &str = ".json";

/// Where everything lives, derived from the global `.lip` directory and the
/// workspace root.
///
/// ```text
/// <global>/cache/<escaped source URL>
/// <workspace>/.lip/metadata/<escaped tooth path>.json
/// <workspace>/.lip/plugins/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    global_dir: PathBuf,
    workspace_dir: PathBuf,
}

impl Layout {
    /// Use the given roots as-is.
    pub fn new(global_dir: impl Into<PathBuf>, workspace_dir: impl Into<PathBuf>) -> Self {
        Self {
            global_dir: global_dir.into(),
            workspace_dir: workspace_dir.into(),
        }
    }

    /// Make relative roots absolute against `current_dir` and normalize them.
    pub fn resolve(global_dir: &Path, workspace_dir: &Path, current_dir: &Path) -> Self {
        Self::new(
            absolute_path(current_dir, global_dir),
            absolute_path(current_dir, workspace_dir),
        )
    }

    pub fn global_dir(&self) -> &Path {
        &self.global_dir
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.global_dir.join(CACHE_DIR)
    }

    pub fn workspace_dir(&self) -> &Path {
        &self.workspace_dir
    }

    pub fn workspace_dot_dir(&self) -> PathBuf {
        self.workspace_dir.join(WORKSPACE_DOT_DIR)
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.workspace_dot_dir().join(METADATA_DIR)
    }

    pub fn plugin_dir(&self) -> PathBuf {
        self.workspace_dot_dir().join(PLUGIN_DIR)
    }

    /// Cache location of a file downloaded from `source_url`.
    pub fn cache_path_for(&self, source_url: &str) -> PathBuf {
        self.cache_dir().join(escape_key(source_url))
    }

    /// Location of the recorded metadata of an installed tooth.
    pub fn metadata_path_for(&self, tooth_path: &str) -> PathBuf {
        self.metadata_dir()
            .join(format!("{}{}", escape_key(tooth_path), METADATA_EXTENSION))
    }
}
