//! URL handling module for Ripple-Rank
//!
//! This module answers two questions for the rest of the crate: is a raw
//! link string a well-formed absolute URL, and which host (origin) does a
//! URL belong to for robots.txt purposes.
//!
//! URL identity is the exact validated string. Nothing here canonicalizes:
//! `https://example.com/a` and `https://example.com/a/` are distinct pages.

mod origin;
mod validate;

// Re-export main functions
pub use origin::{origin_of, robots_url};
pub use validate::{is_valid_absolute_url, parse_absolute_url};
