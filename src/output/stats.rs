//! Crawl statistics
//!
//! Counters collected by the coordinator while a crawl runs, and their
//! human-readable rendering for `--stats`.

use crate::crawler::PageStatus;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt::Write;

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// Link budget the run was configured with
    pub budget: usize,

    /// Total number of pages discovered, seed included
    pub pages_discovered: u64,

    /// Count of dispatched pages by outcome
    pub pages_by_status: HashMap<PageStatus, u64>,

    /// Number of dispatch batches run
    pub batches: u64,

    /// Candidate links that became new pages
    pub links_admitted: u64,

    /// New candidate links refused because the budget was reached
    pub links_dropped: u64,

    /// Edges recorded in the link graph
    pub edges: u64,

    /// robots.txt fetches performed (one per host at most)
    pub robots_fetches: u64,

    pub started_at: DateTime<Utc>,

    pub finished_at: Option<DateTime<Utc>>,
}

impl CrawlStatistics {
    /// Creates empty statistics stamped with the current time
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            pages_discovered: 0,
            pages_by_status: HashMap::new(),
            batches: 0,
            links_admitted: 0,
            links_dropped: 0,
            edges: 0,
            robots_fetches: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Records the outcome of one dispatched page
    pub fn record(&mut self, status: PageStatus) {
        *self.pages_by_status.entry(status).or_insert(0) += 1;
    }

    /// Number of pages with the given outcome
    pub fn count(&self, status: PageStatus) -> u64 {
        self.pages_by_status.get(&status).copied().unwrap_or(0)
    }

    /// Total pages sent through the fetch pipeline
    pub fn pages_dispatched(&self) -> u64 {
        self.pages_by_status.values().sum()
    }

    /// Marks the end of the run
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock duration in milliseconds, once finished
    pub fn duration_millis(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds())
    }
}

/// Renders statistics as a multi-line report
pub fn format_statistics(stats: &CrawlStatistics) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Crawl Statistics ===\n");

    let _ = writeln!(out, "Overview:");
    let _ = writeln!(
        out,
        "  Pages discovered: {} (budget {})",
        stats.pages_discovered, stats.budget
    );
    let _ = writeln!(out, "  Pages dispatched: {}", stats.pages_dispatched());
    let _ = writeln!(out, "  Batches: {}", stats.batches);
    let _ = writeln!(out, "  Links admitted: {}", stats.links_admitted);
    let _ = writeln!(out, "  Links dropped at budget: {}", stats.links_dropped);
    let _ = writeln!(out, "  Graph edges: {}", stats.edges);
    let _ = writeln!(out, "  robots.txt fetches: {}", stats.robots_fetches);
    if let Some(ms) = stats.duration_millis() {
        let _ = writeln!(out, "  Duration: {:.2}s", ms as f64 / 1000.0);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Pages by Outcome:");
    // Sort outcomes by count (descending), then name for stable output
    let mut status_counts: Vec<_> = stats.pages_by_status.iter().collect();
    status_counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));

    let dispatched = stats.pages_dispatched();
    for (status, count) in status_counts {
        let percentage = if dispatched > 0 {
            (*count as f64 / dispatched as f64) * 100.0
        } else {
            0.0
        };
        let _ = writeln!(out, "  {}: {} ({:.1}%)", status, count, percentage);
    }

    out
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    print!("{}", format_statistics(stats));
}
