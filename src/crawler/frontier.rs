//! Crawl frontier: the discovered set and the queue of URLs awaiting a fetch
//!
//! The frontier has exactly one owner, the coordinator, which is the only
//! code that admits links. A URL enters the discovered set in the same step
//! that appends it to the queue, so nothing is ever queued twice, and the
//! discovered set never grows past the link budget.

use std::collections::{HashSet, VecDeque};
use std::fmt;

/// Lifecycle of one crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlPhase {
    /// Frontier seeded, nothing dispatched yet
    Init,
    /// Dispatching batches
    Running,
    /// Budget reached or queue exhausted; last results are being admitted
    Draining,
    /// No further work
    Done,
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Running => "running",
            Self::Draining => "draining",
            Self::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of offering a link to the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// New URL, now discovered and queued
    Admitted,
    /// Already discovered earlier in the run
    Duplicate,
    /// New URL, refused because the budget is reached
    BudgetFull,
}

/// Discovered set plus FIFO work queue, bounded by a link budget
#[derive(Debug, Clone)]
pub struct Frontier {
    budget: usize,
    discovered: HashSet<String>,
    order: Vec<String>,
    queue: VecDeque<String>,
}

impl Frontier {
    /// Creates a frontier holding only the seed
    ///
    /// The seed is always discovered, even with a budget of zero.
    pub fn new(seed: &str, budget: usize) -> Self {
        let mut frontier = Self {
            budget,
            discovered: HashSet::new(),
            order: Vec::new(),
            queue: VecDeque::new(),
        };
        frontier.insert(seed);
        frontier
    }

    fn insert(&mut self, url: &str) {
        self.discovered.insert(url.to_string());
        self.order.push(url.to_string());
        self.queue.push_back(url.to_string());
    }

    /// Offers a link for discovery
    pub fn admit(&mut self, url: &str) -> Admission {
        if self.discovered.contains(url) {
            return Admission::Duplicate;
        }
        if self.is_full() {
            return Admission::BudgetFull;
        }
        self.insert(url);
        Admission::Admitted
    }

    /// Removes up to `width` URLs from the front of the queue
    pub fn pop_batch(&mut self, width: usize) -> Vec<String> {
        let take = width.min(self.queue.len());
        self.queue.drain(..take).collect()
    }

    pub fn is_full(&self) -> bool {
        self.discovered.len() >= self.budget
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.discovered.contains(url)
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Number of discovered URLs, seed included
    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }

    /// Number of URLs still waiting to be dispatched
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Discovered URLs in discovery order
    pub fn discovered(&self) -> &[String] {
        &self.order
    }

    pub fn into_discovered(self) -> Vec<String> {
        self.order
    }
}
