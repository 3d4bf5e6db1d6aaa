//! Lexical path helpers. None of these touch the filesystem.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by processing `.` and `..` components lexically.
/// This does not access the filesystem and does not follow symlinks.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Keep the `..` if there is nothing left to pop
                if !result.pop() {
                    result.push(component);
                }
            }
            _ => result.push(component),
        }
    }
    result
}

/// Resolve `path` against `base` when it is relative, then normalize.
pub fn absolute_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_plain() {
        assert_eq!(
            normalize_path(Path::new("/home/user/.lip")),
            PathBuf::from("/home/user/.lip")
        );
    }

    #[test]
    fn test_normalize_path_drops_cur_dir() {
        assert_eq!(
            normalize_path(Path::new("/home/./user/./.lip")),
            PathBuf::from("/home/user/.lip")
        );
    }

    #[test]
    fn test_normalize_path_resolves_parent_dir() {
        assert_eq!(
            normalize_path(Path::new("/work/project/../other/.lip")),
            PathBuf::from("/work/other/.lip")
        );
    }

    #[test]
    fn test_normalize_path_relative_leading_parent_is_kept() {
        assert_eq!(
            normalize_path(Path::new("../shared/cache")),
            PathBuf::from("../shared/cache")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_absolute_path_joins_relative() {
        assert_eq!(
            absolute_path(Path::new("/work/project"), Path::new("./sub/../ws")),
            PathBuf::from("/work/project/ws")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_absolute_path_keeps_absolute() {
        assert_eq!(
            absolute_path(Path::new("/work/project"), Path::new("/opt/lip/./cache")),
            PathBuf::from("/opt/lip/cache")
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_absolute_path_windows() {
        assert_eq!(
            absolute_path(Path::new(r"C:\work"), Path::new(r"ws\..\proj")),
            PathBuf::from(r"C:\work\proj")
        );
    }
}
