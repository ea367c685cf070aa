//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates all aspects of
//! the crawling process, including:
//! - Seeding the frontier and the link graph
//! - Dispatching batches of URLs to worker tasks
//! - Waiting for each batch to finish before admitting its links
//! - Recording edges in the link graph
//!
//! The coordinator is the single writer of the frontier and the graph.
//! Workers only return values; they never share mutable crawl state, and the
//! only structure they touch concurrently is the robots.txt cache.

use crate::config::Config;
use crate::crawler::frontier::{Admission, CrawlPhase, Frontier};
use crate::crawler::worker::{crawl_page, PageOutcome, PageStatus};
use crate::crawler::Fetcher;
use crate::graph::LinkGraph;
use crate::output::CrawlStatistics;
use crate::robots::RobotsPolicy;
use crate::url::parse_absolute_url;
use crate::RippleError;
use futures::future::join_all;
use std::sync::Arc;

/// Everything a finished crawl produced
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// The seed URL the crawl started from
    pub seed: String,

    /// Discovered URLs in discovery order, seed first
    pub discovered: Vec<String>,

    /// Link graph over the discovered URLs
    pub graph: LinkGraph,

    pub stats: CrawlStatistics,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    seed: String,
    worker_pool_width: usize,
    fetcher: Arc<dyn Fetcher>,
    robots: Arc<RobotsPolicy>,
    frontier: Frontier,
    graph: LinkGraph,
    phase: CrawlPhase,
    stats: CrawlStatistics,
}

impl Coordinator {
    /// Creates a new coordinator instance in the `Init` phase
    ///
    /// # Arguments
    ///
    /// * `seed` - The URL to start from; must be an absolute http(s) URL
    /// * `config` - The crawler configuration
    /// * `fetcher` - Used for pages and robots.txt files alike
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(RippleError)` - The seed is not a valid absolute URL
    pub fn new(seed: &str, config: &Config, fetcher: Arc<dyn Fetcher>) -> Result<Self, RippleError> {
        parse_absolute_url(seed)?;

        let robots = Arc::new(RobotsPolicy::new(
            Arc::clone(&fetcher),
            config.user_agent.robots_agent.clone(),
            config.robots.unavailable_policy,
        ));

        let budget = config.crawler.link_budget;
        let frontier = Frontier::new(seed, budget);
        let mut graph = LinkGraph::new();
        graph.add_seed(seed);

        Ok(Self {
            seed: seed.to_string(),
            worker_pool_width: config.crawler.worker_pool_width.max(1),
            fetcher,
            robots,
            frontier,
            graph,
            phase: CrawlPhase::Init,
            stats: CrawlStatistics::new(budget),
        })
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    /// The robots.txt policy shared with worker tasks
    pub fn robots(&self) -> &RobotsPolicy {
        &self.robots
    }

    fn transition(&mut self, next: CrawlPhase) {
        tracing::debug!("Crawl phase {} -> {}", self.phase, next);
        self.phase = next;
    }

    /// Runs the main crawl loop until the budget is reached or the queue empties
    ///
    /// Each round pops up to `worker_pool_width` URLs from the front of the
    /// queue, crawls them concurrently, and admits their links only after
    /// every task of the round has finished.
    pub async fn run(mut self) -> CrawlReport {
        tracing::info!(
            "Starting crawl from {} (budget {}, {} workers)",
            self.seed,
            self.frontier.budget(),
            self.worker_pool_width
        );
        self.transition(CrawlPhase::Running);

        while self.frontier.has_pending() && !self.frontier.is_full() {
            let batch = self.frontier.pop_batch(self.worker_pool_width);
            let outcomes = self.dispatch(batch).await;
            self.admit(&outcomes);
            self.stats.batches += 1;

            tracing::info!(
                "Progress: {} discovered, {} queued, {} batches",
                self.frontier.len(),
                self.frontier.queue_len(),
                self.stats.batches
            );
        }

        self.transition(CrawlPhase::Draining);
        if self.frontier.is_full() {
            tracing::info!(
                "Link budget of {} reached, {} queued URLs left uncrawled",
                self.frontier.budget(),
                self.frontier.queue_len()
            );
        } else {
            tracing::info!("Frontier is empty, crawl complete");
        }
        self.transition(CrawlPhase::Done);

        self.stats.pages_discovered = self.frontier.len() as u64;
        self.stats.edges = self.graph.edge_count() as u64;
        self.stats.robots_fetches = self.robots.fetch_count() as u64;
        self.stats.finish();

        tracing::info!(
            "Crawl completed: {} pages discovered, {} dispatched",
            self.stats.pages_discovered,
            self.stats.pages_dispatched()
        );

        CrawlReport {
            seed: self.seed,
            discovered: self.frontier.into_discovered(),
            graph: self.graph,
            stats: self.stats,
        }
    }

    /// Crawls one batch concurrently and returns outcomes in dispatch order
    async fn dispatch(&self, batch: Vec<String>) -> Vec<PageOutcome> {
        let handles: Vec<_> = batch
            .iter()
            .map(|url| {
                tracing::debug!("Dispatching {}", url);
                tokio::spawn(crawl_page(
                    Arc::clone(&self.fetcher),
                    Arc::clone(&self.robots),
                    url.clone(),
                ))
            })
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .zip(batch)
            .map(|(joined, url)| match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("Worker for {} failed: {}", url, e);
                    PageOutcome::empty(url, PageStatus::TaskFailed)
                }
            })
            .collect()
    }

    /// Admits a finished batch into the frontier and the graph
    ///
    /// Links are offered in dispatch order, then link order. Once the budget
    /// is reached every further new link is dropped. Afterwards each source
    /// page's outbound list is set to those of its links that are pages of
    /// the graph.
    fn admit(&mut self, outcomes: &[PageOutcome]) {
        for outcome in outcomes {
            self.stats.record(outcome.status);

            for link in &outcome.links {
                match self.frontier.admit(link) {
                    Admission::Admitted => {
                        tracing::trace!("Admitted {} (from {})", link, outcome.url);
                        self.graph.add_page(link);
                        self.stats.links_admitted += 1;
                    }
                    Admission::Duplicate => {}
                    Admission::BudgetFull => {
                        tracing::trace!("Dropped {} (budget reached)", link);
                        self.stats.links_dropped += 1;
                    }
                }
            }
        }

        for outcome in outcomes {
            self.graph.set_outbound(&outcome.url, &outcome.links);
        }
    }
}

/// Crawls from `seed` with the given fetcher
///
/// # Example
///
/// ```no_run
/// use ripple_rank::config::Config;
/// use ripple_rank::crawler::{run_crawl, HttpFetcher};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::default();
/// let fetcher = HttpFetcher::from_config(&config.user_agent, Duration::from_secs(30))?;
/// let report = run_crawl("https://example.com/", &config, Arc::new(fetcher)).await?;
/// println!("{} pages", report.discovered.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(
    seed: &str,
    config: &Config,
    fetcher: Arc<dyn Fetcher>,
) -> Result<CrawlReport, RippleError> {
    let coordinator = Coordinator::new(seed, config, fetcher)?;
    Ok(coordinator.run().await)
}
