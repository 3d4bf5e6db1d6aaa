//! Root directories and mirror endpoints supplied by the caller.

use log::debug;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths::Layout;
use crate::runtime::Runtime;
use crate::version::Version;

pub const LIP_HOME_ENV: &str = "LIP_HOME";
pub const GOPROXY_ENV: &str = "LIP_GOPROXY";
pub const DEFAULT_GOPROXY: &str = "https://goproxy.io";

/// Settings this crate consumes but never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    lip_version: Version,
    global_dir: PathBuf,
    workspace_dir: PathBuf,
    goproxy_list: Vec<String>,
}

impl Config {
    pub fn new(
        lip_version: Version,
        global_dir: impl Into<PathBuf>,
        workspace_dir: impl Into<PathBuf>,
        goproxy_list: Vec<String>,
    ) -> Self {
        Self {
            lip_version,
            global_dir: global_dir.into(),
            workspace_dir: workspace_dir.into(),
            goproxy_list,
        }
    }

    /// Defaults from the environment:
    /// - global directory: `$LIP_HOME`, else `<home>/.lip`
    /// - workspace: the current directory
    /// - mirrors: comma-separated `$LIP_GOPROXY`, else [`DEFAULT_GOPROXY`]
    ///
    /// `lip_version` is the version of the calling tool, kept as given.
    #[tracing::instrument(skip(runtime))]
    pub fn from_env<R: Runtime>(runtime: &R, lip_version: Version) -> Result<Self> {
        let global_dir = match runtime.env_var(LIP_HOME_ENV) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => runtime.home_dir().ok_or(Error::NoHomeDir)?.join(".lip"),
        };

        let workspace_dir = runtime
            .current_dir()
            .map_err(|e| Error::io(Path::new("."), e))?;

        let goproxy_list = match runtime.env_var(GOPROXY_ENV) {
            Ok(list) => parse_goproxy_list(&list),
            Err(_) => Vec::new(),
        };
        let goproxy_list = if goproxy_list.is_empty() {
            vec![DEFAULT_GOPROXY.to_string()]
        } else {
            goproxy_list
        };

        debug!(
            "Using global dir {}, workspace {}, {} mirror(s)",
            global_dir.display(),
            workspace_dir.display(),
            goproxy_list.len()
        );

        Ok(Self::new(lip_version, global_dir, workspace_dir, goproxy_list))
    }

    /// Version of the tool these settings were made for.
    pub fn lip_version(&self) -> &Version {
        &self.lip_version
    }

    pub fn global_dir(&self) -> &Path {
        &self.global_dir
    }

    pub fn workspace_dir(&self) -> &Path {
        &self.workspace_dir
    }

    /// Mirror endpoints, in preference order.
    pub fn goproxy_list(&self) -> &[String] {
        &self.goproxy_list
    }

    /// Absolute layout for these roots; relative roots are taken from the
    /// current directory.
    pub fn layout<R: Runtime>(&self, runtime: &R) -> Result<Layout> {
        let current_dir = if self.global_dir.is_absolute() && self.workspace_dir.is_absolute() {
            PathBuf::new()
        } else {
            runtime
                .current_dir()
                .map_err(|e| Error::io(Path::new("."), e))?
        };
        Ok(Layout::resolve(
            &self.global_dir,
            &self.workspace_dir,
            &current_dir,
        ))
    }
}

fn parse_goproxy_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(String::from)
        .collect()
}
