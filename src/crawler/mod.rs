//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching without retries
//! - HTML link extraction
//! - The bounded frontier and its deduplication
//! - Batch dispatch and single-writer admission

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod worker;

pub use coordinator::{run_crawl, Coordinator, CrawlReport};
pub use fetcher::{build_http_client, fetch_url, FetchResult, Fetcher, HttpFetcher};
pub use frontier::{Admission, CrawlPhase, Frontier};
pub use parser::extract_hrefs;
pub use worker::{crawl_page, filter_links, PageOutcome, PageStatus};

use crate::config::Config;
use crate::RippleError;
use std::sync::Arc;
use std::time::Duration;

/// Runs a complete crawl over the network
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client from the user agent settings
/// 2. Seed the frontier with `seed`
/// 3. Crawl batch by batch until the budget or the frontier is exhausted
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed
/// * `Err(RippleError)` - The HTTP client could not be built or the seed is invalid
pub async fn crawl(seed: &str, config: &Config) -> Result<CrawlReport, RippleError> {
    let timeout = Duration::from_secs(config.crawler.fetch_timeout_secs);
    let fetcher = HttpFetcher::from_config(&config.user_agent, timeout)?;
    run_crawl(seed, config, Arc::new(fetcher)).await
}
