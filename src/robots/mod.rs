//! Robots.txt handling module
//!
//! This module provides functionality for fetching, parsing, and caching robots.txt files.
//! Each host's robots.txt is fetched at most once per crawl.
//!
//! When a host's robots.txt cannot be fetched or parsed the host is recorded
//! as unavailable and [`UnavailablePolicy`] decides the answer. The default,
//! [`UnavailablePolicy::Allow`], treats every path on such a host as allowed.

mod cache;
mod parser;

pub use cache::{RobotsCache, RobotsRecord, RobotsStatus};
pub use parser::ParsedRobots;

use crate::config::UnavailablePolicy;
use crate::crawler::Fetcher;
use crate::url::{origin_of, parse_absolute_url, robots_url};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use url::Url;

/// Fetches and parses robots.txt for the host serving `url`
///
/// Any fetch failure or unparseable body yields [`RobotsRecord::Unavailable`].
pub async fn fetch_robots(fetcher: &dyn Fetcher, url: &Url) -> RobotsRecord {
    let location = robots_url(url);
    let result = fetcher.fetch(&location).await;

    match result.into_body() {
        Some(body) => match ParsedRobots::parse(&body) {
            Some(robots) => {
                tracing::debug!("Parsed robots.txt from {}", location);
                RobotsRecord::Available(robots)
            }
            None => {
                tracing::debug!("Unparseable robots.txt at {}", location);
                RobotsRecord::Unavailable
            }
        },
        None => {
            tracing::debug!("robots.txt unavailable at {}", location);
            RobotsRecord::Unavailable
        }
    }
}

/// Answers "may this agent fetch this URL" for every host of a crawl
///
/// Shared between worker tasks behind an `Arc`; the cache inside makes
/// concurrent first lookups for a host collapse into one fetch.
pub struct RobotsPolicy {
    fetcher: Arc<dyn Fetcher>,
    user_agent: String,
    unavailable_policy: UnavailablePolicy,
    cache: RobotsCache,
    fetches: AtomicUsize,
}

impl RobotsPolicy {
    /// Creates a policy evaluating rules for `user_agent`
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        user_agent: impl Into<String>,
        unavailable_policy: UnavailablePolicy,
    ) -> Self {
        Self {
            fetcher,
            user_agent: user_agent.into(),
            unavailable_policy,
            cache: RobotsCache::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    /// The agent token this policy evaluates by default
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Checks `url` for the configured user agent
    pub async fn allowed(&self, url: &str) -> bool {
        self.allowed_for(url, &self.user_agent).await
    }

    /// Checks `url` for an arbitrary user agent
    ///
    /// URLs that are not valid absolute http(s) URLs are never allowed.
    pub async fn allowed_for(&self, url: &str, user_agent: &str) -> bool {
        let parsed = match parse_absolute_url(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!("Refusing robots check for {}: {}", url, e);
                return false;
            }
        };

        match self.record_for(&parsed).await {
            RobotsRecord::Available(robots) => robots.is_allowed(url, user_agent),
            RobotsRecord::Unavailable => self.unavailable_policy == UnavailablePolicy::Allow,
        }
    }

    async fn record_for(&self, url: &Url) -> RobotsRecord {
        let origin = origin_of(url);
        self.cache
            .get_or_init(&origin, || async {
                self.fetches.fetch_add(1, Ordering::SeqCst);
                tracing::debug!("Fetching robots.txt for {}", origin);
                fetch_robots(self.fetcher.as_ref(), url).await
            })
            .await
    }

    /// Cache state for the host serving `url`
    pub async fn status(&self, url: &str) -> RobotsStatus {
        match parse_absolute_url(url) {
            Ok(parsed) => self.cache.status(&origin_of(&parsed)).await,
            Err(_) => RobotsStatus::Unknown,
        }
    }

    /// Number of robots.txt fetches performed so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Number of hosts with a cached record
    pub async fn cached_hosts(&self) -> usize {
        self.cache.len().await
    }
}
