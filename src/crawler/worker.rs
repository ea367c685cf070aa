//! The per-URL pipeline run by each worker task
//!
//! robots check -> fetch -> extract -> validate -> dedup. A worker never
//! touches the frontier or the graph; it hands its [`PageOutcome`] back to
//! the coordinator, which admits the links.

use crate::crawler::parser::extract_hrefs;
use crate::crawler::Fetcher;
use crate::robots::RobotsPolicy;
use crate::url::is_valid_absolute_url;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// How a dispatched page ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageStatus {
    /// Fetched and parsed
    Crawled,

    /// robots.txt disallows the page; it was never fetched
    RobotsDenied,

    /// Transport error, timeout or non-2xx status
    FetchFailed,

    /// The worker task itself died before reporting
    TaskFailed,
}

impl PageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crawled => "crawled",
            Self::RobotsDenied => "robots_denied",
            Self::FetchFailed => "fetch_failed",
            Self::TaskFailed => "task_failed",
        }
    }

    /// Returns true if the page was fetched successfully
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Crawled)
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running the pipeline for one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    /// The URL that was dispatched
    pub url: String,

    pub status: PageStatus,

    /// Valid absolute links in first-occurrence order, without repeats
    pub links: Vec<String>,
}

impl PageOutcome {
    /// An outcome with no links
    pub fn empty(url: impl Into<String>, status: PageStatus) -> Self {
        Self {
            url: url.into(),
            status,
            links: Vec::new(),
        }
    }
}

/// Keeps valid absolute URLs, dropping repeats after their first occurrence
pub fn filter_links(raw: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter(|link| is_valid_absolute_url(link))
        .filter(|link| seen.insert(link.clone()))
        .collect()
}

/// Runs the full pipeline for `url`
pub async fn crawl_page(
    fetcher: Arc<dyn Fetcher>,
    robots: Arc<RobotsPolicy>,
    url: String,
) -> PageOutcome {
    if !robots.allowed(&url).await {
        tracing::info!("URL {} disallowed by robots.txt", url);
        return PageOutcome::empty(url, PageStatus::RobotsDenied);
    }

    let body = match fetcher.fetch(&url).await.into_body() {
        Some(body) => body,
        None => {
            tracing::debug!("No content for {}", url);
            return PageOutcome::empty(url, PageStatus::FetchFailed);
        }
    };

    let raw = extract_hrefs(&body);
    let raw_count = raw.len();
    let links = filter_links(raw);
    tracing::debug!(
        "Extracted {} links from {} ({} raw hrefs)",
        links.len(),
        url,
        raw_count
    );

    PageOutcome {
        url,
        status: PageStatus::Crawled,
        links,
    }
}
