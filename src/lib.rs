//! Ripple-Rank: a bounded, polite crawler with link-graph ranking
//!
//! This crate discovers links breadth-first from a single seed URL up to a
//! link budget, respecting robots.txt, and then scores the discovered pages
//! with an iterative PageRank computation over the resulting link graph.

pub mod config;
pub mod crawler;
pub mod graph;
pub mod output;
pub mod rank;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Ripple-Rank operations
///
/// Only startup problems end up here. Failures during a crawl (transport
/// errors, unavailable robots.txt, malformed links) are absorbed by the
/// engine and never abort a run.
#[derive(Debug, Error)]
pub enum RippleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("No seed URL given on the command line or in the configuration")]
    MissingSeed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Ripple-Rank operations
pub type Result<T> = std::result::Result<T, RippleError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlReport};
pub use graph::{LinkGraph, Page};
pub use rank::{PageRank, RankConfig, RankOutcome};
pub use url::is_valid_absolute_url;
