//! Tooth path validation.
//!
//! A tooth path is the unique identity of a package, e.g.
//! `github.com/tooth-hub/demo`: one or more `/`-separated segments, each
//! starting with a lower-case letter or digit and continuing with lower-case
//! letters, digits, `.`, `_` or `-`.

use regex::Regex;
use std::sync::LazyLock;

static TOOTH_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9._-]*(/[a-z0-9][a-z0-9._-]*)*$")
        .expect("tooth path pattern is valid")
});

/// Check whether `path` is a valid, already lower-cased tooth path.
pub fn is_valid_tooth_path(path: &str) -> bool {
    TOOTH_PATH.is_match(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tooth_paths() {
        assert!(is_valid_tooth_path("github.com/tooth-hub/demo"));
        assert!(is_valid_tooth_path("com.example/pkg"));
        assert!(is_valid_tooth_path("single"));
        assert!(is_valid_tooth_path("a_b/c-d/e.f/0"));
    }

    #[test]
    fn test_upper_case_is_invalid() {
        assert!(!is_valid_tooth_path("com.Example/Pkg"));
    }

    #[test]
    fn test_empty_and_separator_edge_cases() {
        assert!(!is_valid_tooth_path(""));
        assert!(!is_valid_tooth_path("/leading"));
        assert!(!is_valid_tooth_path("trailing/"));
        assert!(!is_valid_tooth_path("double//slash"));
        assert!(!is_valid_tooth_path("-dash/first"));
    }

    #[test]
    fn test_whitespace_is_invalid() {
        assert!(!is_valid_tooth_path("has space/pkg"));
        assert!(!is_valid_tooth_path("tab\tpkg"));
        assert!(!is_valid_tooth_path("newline/pkg\n"));
    }
}
