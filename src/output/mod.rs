//! Output module for rendering crawl and ranking results
//!
//! This module handles:
//! - Rendering the discovered URL set for crawl mode
//! - Rendering ranked `(URL, score)` lines for rank mode
//! - Recording crawl statistics

pub mod stats;

pub use stats::{format_statistics, print_statistics, CrawlStatistics};

use crate::rank::RankOutcome;

/// Renders one discovered URL per line, in discovery order
pub fn format_discovered(discovered: &[String]) -> Vec<String> {
    discovered.to_vec()
}

/// Renders ranked pages, highest score first
///
/// # Arguments
///
/// * `outcome` - The ranking to render
/// * `exclude` - A URL to leave out of the listing, typically the seed
///
/// Scores are printed with four decimal places. The excluded page still
/// holds its share of the total, so the printed scores sum to less than 1.
pub fn format_ranking(outcome: &RankOutcome, exclude: Option<&str>) -> Vec<String> {
    outcome
        .scores()
        .iter()
        .filter(|(url, _)| exclude != Some(url.as_str()))
        .map(|(url, score)| format!("URL: {} || (PageRank: {:.4})", url, score))
        .collect()
}
