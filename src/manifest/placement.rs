//! File placement rules: which files inside a tooth archive go where.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::DecodeError;

// Starts with a letter or digit and contains no whitespace.
static PLACEMENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]\S*$").expect("placement pattern is valid"));

fn is_valid_token(token: &str) -> bool {
    PLACEMENT_TOKEN.is_match(token)
}

/// Maps a `source` path inside the archive to a `destination` relative to
/// the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    source: String,
    destination: String,
}

impl Placement {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Result<Self, DecodeError> {
        let source = source.into();
        let destination = destination.into();

        if !is_valid_token(&source) {
            return Err(DecodeError::InvalidSource(source));
        }
        if !is_valid_token(&destination) {
            return Err(DecodeError::InvalidDestination(destination));
        }

        Ok(Self {
            source,
            destination,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_relative_paths() {
        let placement = Placement::new("assets/file.txt", "plugins/file.txt").unwrap();
        assert_eq!(placement.source(), "assets/file.txt");
        assert_eq!(placement.destination(), "plugins/file.txt");
    }

    #[test]
    fn test_rejects_embedded_space() {
        let err = Placement::new("a b", "dest").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidSource(ref s) if s == "a b"));
    }

    #[test]
    fn test_rejects_leading_space() {
        assert!(matches!(
            Placement::new(" assets", "dest"),
            Err(DecodeError::InvalidSource(_))
        ));
    }

    #[test]
    fn test_rejects_leading_separator_and_empty() {
        assert!(matches!(
            Placement::new("/etc/passwd", "dest"),
            Err(DecodeError::InvalidSource(_))
        ));
        assert!(matches!(
            Placement::new("", "dest"),
            Err(DecodeError::InvalidSource(_))
        ));
        assert!(matches!(
            Placement::new("src", "./dest"),
            Err(DecodeError::InvalidDestination(_))
        ));
    }

    #[test]
    fn test_rejects_trailing_newline() {
        assert!(matches!(
            Placement::new("src", "dest\n"),
            Err(DecodeError::InvalidDestination(_))
        ));
    }

    #[test]
    fn test_error_names_offending_token() {
        let err = Placement::new("ok", "bad token").unwrap_err();
        assert_eq!(err.to_string(), "invalid destination: bad token");
    }
}
