//! Configuration module for Ripple-Rank
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use ripple_rank::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawler will discover up to {} links", config.crawler.link_budget);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, RankSettings, RobotsConfig, UnavailablePolicy, UserAgentConfig,
    DEFAULT_CONVERGENCE_DELTA, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_LINK_BUDGET,
    DEFAULT_MAX_ITERATIONS, DEFAULT_WORKER_POOL_WIDTH,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::{validate, validate_seed};
