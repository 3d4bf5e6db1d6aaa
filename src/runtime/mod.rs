//! Runtime abstraction for system operations.
//!
//! Everything that touches the environment or the filesystem goes through
//! [`Runtime`], so path derivation and manifest persistence can be tested
//! against a mock.
//!
//! # Structure
//!
//! - `path` - Lexical path helpers (normalize, make absolute)
//! - `env` - Environment variables, home and current directory
//! - `fs` - File and directory operations

mod env;
mod fs;
pub mod path;

use std::env as std_env;
use std::io;
use std::path::{Path, PathBuf};

pub use path::{absolute_path, normalize_path};

/// What occupies a path, following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;
    fn home_dir(&self) -> Option<PathBuf>;
    fn current_dir(&self) -> io::Result<PathBuf>;

    // File System
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Create `path` and any missing parents. Succeeds if the directory
    /// already exists, including when another process created it first.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Inspect `path`. Returns `Ok(None)` when nothing exists there; any
    /// other failure (e.g. permission denied) is an error.
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir_impl()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.current_dir_impl()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.read_impl(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.write_impl(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.create_dir_all_impl(path)
    }

    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        self.entry_kind_impl(path)
    }
}
