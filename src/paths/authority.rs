//! Path lookups that create their directories on first access.

use log::{debug, trace};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::runtime::{EntryKind, Runtime};

use super::Layout;

/// Hands out cache, metadata and workspace paths, creating the directories
/// that contain them if they are missing. Never deletes anything.
pub struct PathAuthority<'a, R: Runtime> {
    runtime: &'a R,
    layout: Layout,
}

impl<'a, R: Runtime> PathAuthority<'a, R> {
    pub fn new(runtime: &'a R, layout: Layout) -> Self {
        Self { runtime, layout }
    }

    /// The underlying pure layout, for computing paths without side effects.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The global `.lip` directory.
    pub fn global_dir(&self) -> Result<PathBuf> {
        self.ensured(self.layout.global_dir().to_path_buf())
    }

    /// `<global>/cache`
    pub fn cache_root(&self) -> Result<PathBuf> {
        self.global_dir()?;
        self.ensured(self.layout.cache_dir())
    }

    pub fn workspace_root(&self) -> Result<PathBuf> {
        self.ensured(self.layout.workspace_dir().to_path_buf())
    }

    /// `<workspace>/.lip`
    pub fn workspace_dot_dir(&self) -> Result<PathBuf> {
        self.workspace_root()?;
        self.ensured(self.layout.workspace_dot_dir())
    }

    /// `<workspace>/.lip/metadata`
    pub fn metadata_dir(&self) -> Result<PathBuf> {
        self.workspace_dot_dir()?;
        self.ensured(self.layout.metadata_dir())
    }

    /// `<workspace>/.lip/plugins`
    pub fn plugin_dir(&self) -> Result<PathBuf> {
        self.workspace_dot_dir()?;
        self.ensured(self.layout.plugin_dir())
    }

    /// Cache path for a file downloaded from `source_url`. The same URL
    /// always maps to the same path, so an existence check is a cache lookup.
    #[tracing::instrument(skip(self))]
    pub fn cache_path_for(&self, source_url: &str) -> Result<PathBuf> {
        self.cache_root()?;
        let path = self.layout.cache_path_for(source_url);
        trace!("Cache path for {}: {}", source_url, path.display());
        Ok(path)
    }

    /// Path of the recorded metadata for `tooth_path`.
    #[tracing::instrument(skip(self))]
    pub fn metadata_path_for(&self, tooth_path: &str) -> Result<PathBuf> {
        self.metadata_dir()?;
        let path = self.layout.metadata_path_for(tooth_path);
        trace!("Metadata path for {}: {}", tooth_path, path.display());
        Ok(path)
    }

    /// Make sure `dir` exists as a directory.
    ///
    /// An existing directory is left alone. A non-directory in the way is an
    /// [`io::ErrorKind::NotADirectory`] error.
    pub fn ensure_dir(&self, dir: &Path) -> Result<()> {
        match self.runtime.entry_kind(dir).map_err(|e| Error::io(dir, e))? {
            Some(EntryKind::Dir) => Ok(()),
            Some(EntryKind::File) => Err(Error::io(
                dir,
                io::Error::new(
                    io::ErrorKind::NotADirectory,
                    "path exists but is not a directory",
                ),
            )),
            None => {
                debug!("Creating directory {}", dir.display());
                self.runtime
                    .create_dir_all(dir)
                    .map_err(|e| Error::io(dir, e))
            }
        }
    }

    fn ensured(&self, dir: PathBuf) -> Result<PathBuf> {
        self.ensure_dir(&dir)?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::{test_global_dir, test_workspace};
    use mockall::predicate::eq;

    fn layout() -> Layout {
        Layout::new(test_global_dir(), test_workspace())
    }

    /// Every directory already exists.
    fn all_dirs_present(runtime: &mut MockRuntime) {
        runtime
            .expect_entry_kind()
            .returning(|_| Ok(Some(EntryKind::Dir)));
    }

    #[test]
    fn test_metadata_dir_created_when_absent() {
        let mut runtime = MockRuntime::new();

        // --- Setup ---

        // Workspace and .lip exist, metadata does not
        let metadata_dir = test_workspace().join(".lip").join("metadata");
        runtime
            .expect_entry_kind()
            .with(eq(metadata_dir.clone()))
            .times(1)
            .returning(|_| Ok(None));
        runtime
            .expect_entry_kind()
            .returning(|_| Ok(Some(EntryKind::Dir)));
        runtime
            .expect_create_dir_all()
            .with(eq(metadata_dir.clone()))
            .times(1)
            .returning(|_| Ok(()));

        // --- Execute ---

        let authority = PathAuthority::new(&runtime, layout());
        let path = authority.metadata_dir().unwrap();

        // --- Verify ---

        assert_eq!(path, metadata_dir);
    }

    #[test]
    fn test_existing_dirs_are_not_recreated() {
        let mut runtime = MockRuntime::new();
        all_dirs_present(&mut runtime);
        runtime.expect_create_dir_all().never();

        let authority = PathAuthority::new(&runtime, layout());

        assert_eq!(authority.plugin_dir().unwrap(), layout().plugin_dir());
        assert_eq!(authority.cache_root().unwrap(), layout().cache_dir());
    }

    #[test]
    fn test_cache_path_for_creates_cache_chain() {
        let mut runtime = MockRuntime::new();

        // Nothing exists yet: global dir then cache dir get created, in order
        runtime.expect_entry_kind().returning(|_| Ok(None));
        let mut seq = mockall::Sequence::new();
        runtime
            .expect_create_dir_all()
            .with(eq(test_global_dir()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        runtime
            .expect_create_dir_all()
            .with(eq(test_global_dir().join("cache")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let authority = PathAuthority::new(&runtime, layout());
        let path = authority.cache_path_for("https://example.com/x.zip").unwrap();

        assert_eq!(path, layout().cache_path_for("https://example.com/x.zip"));
    }

    #[test]
    fn test_file_in_the_way_is_not_a_directory() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_entry_kind()
            .returning(|_| Ok(Some(EntryKind::File)));
        runtime.expect_create_dir_all().never();

        let authority = PathAuthority::new(&runtime, layout());
        let err = authority.workspace_root().unwrap_err();

        match err {
            Error::Io { path, source } => {
                assert_eq!(path, test_workspace());
                assert_eq!(source.kind(), io::ErrorKind::NotADirectory);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_stat_failure_is_reported() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_entry_kind()
            .returning(|_| Err(io::Error::from(io::ErrorKind::PermissionDenied)));

        let authority = PathAuthority::new(&runtime, layout());
        let err = authority.global_dir().unwrap_err();

        assert!(matches!(
            err,
            Error::Io { ref source, .. } if source.kind() == io::ErrorKind::PermissionDenied
        ));
    }

    #[test]
    fn test_create_failure_is_reported_with_path() {
        let mut runtime = MockRuntime::new();
        runtime.expect_entry_kind().returning(|_| Ok(None));
        runtime
            .expect_create_dir_all()
            .returning(|_| Err(io::Error::from(io::ErrorKind::StorageFull)));

        let authority = PathAuthority::new(&runtime, layout());
        let err = authority.plugin_dir().unwrap_err();

        // Fails at the first directory in the chain
        assert!(matches!(err, Error::Io { ref path, .. } if *path == test_workspace()));
    }
}
