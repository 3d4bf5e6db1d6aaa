//! Path authority
//!
//! Derives canonical locations for cached downloads, recorded tooth metadata
//! and the standard workspace directories.
//!
//! - [`Layout`] computes paths and never touches the filesystem.
//! - [`PathAuthority`] returns the same paths after making sure their
//!   directories exist.

mod authority;
mod escape;
mod layout;

pub use authority::PathAuthority;
pub use escape::escape_key;
pub use layout::Layout;
