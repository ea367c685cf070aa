//! Robots.txt parser implementation
//!
//! This module provides functionality for parsing robots.txt content using the robotstxt crate.

use robotstxt::DefaultMatcher;

/// Parsed robots.txt data
///
/// This is a wrapper around the robotstxt crate's matcher, providing a
/// simplified interface for checking if URLs are allowed. The rules are
/// evaluated on demand against the stored body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRobots {
    /// Raw robots.txt content
    content: String,
}

impl ParsedRobots {
    /// Parses raw robots.txt content
    ///
    /// robots.txt is a forgiving format, so nearly any text parses. Two kinds
    /// of body are rejected because they are clearly not a rules file:
    /// an HTML document (servers that answer every path with a page) and
    /// binary content containing NUL bytes.
    ///
    /// # Returns
    ///
    /// * `Some(ParsedRobots)` - The body can be evaluated as robots.txt
    /// * `None` - The body is not a robots.txt file
    pub fn parse(content: &str) -> Option<Self> {
        if content.trim_start().starts_with('<') || content.contains('\0') {
            return None;
        }

        Some(Self {
            content: content.to_string(),
        })
    }

    /// Returns the raw robots.txt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Checks if a URL is allowed for the given user agent
    ///
    /// # Arguments
    ///
    /// * `url` - The absolute URL to check
    /// * `user_agent` - The agent token (`*` obeys only the global group)
    ///
    /// # Returns
    ///
    /// * `true` - If the URL is allowed
    /// * `false` - If the URL is disallowed
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        if self.content.trim().is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, user_agent, url)
    }
}
