use serde::Deserialize;

/// Default number of unique URLs a crawl may discover
pub const DEFAULT_LINK_BUDGET: usize = 100;

/// Default number of concurrent fetch tasks per dispatch batch
pub const DEFAULT_WORKER_POOL_WIDTH: usize = 5;

/// Default per-request timeout in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default summed-delta threshold for PageRank convergence
pub const DEFAULT_CONVERGENCE_DELTA: f64 = 0.001;

/// Default hard cap on PageRank iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 200;

/// Main configuration structure for Ripple-Rank
///
/// Every section may be omitted from the TOML file; missing values take the
/// defaults above.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed URL the crawl starts from (the CLI may override it)
    pub seed: Option<String>,

    pub crawler: CrawlerConfig,

    pub rank: RankSettings,

    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,

    pub robots: RobotsConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of unique URLs to discover, seed included
    #[serde(rename = "link-budget")]
    pub link_budget: usize,

    /// Number of URLs dispatched concurrently per batch
    #[serde(rename = "worker-pool-width")]
    pub worker_pool_width: usize,

    /// Timeout applied to every page and robots.txt request
    #[serde(rename = "fetch-timeout-secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            link_budget: DEFAULT_LINK_BUDGET,
            worker_pool_width: DEFAULT_WORKER_POOL_WIDTH,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

/// PageRank solver configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RankSettings {
    #[serde(rename = "convergence-delta")]
    pub convergence_delta: f64,

    #[serde(rename = "max-iterations")]
    pub max_iterations: usize,

    /// Classical damping factor; absent keeps the undamped recurrence
    #[serde(rename = "damping-factor")]
    pub damping_factor: Option<f64>,
}

impl Default for RankSettings {
    fn default() -> Self {
        Self {
            convergence_delta: DEFAULT_CONVERGENCE_DELTA,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            damping_factor: None,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler, sent in the User-Agent header
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler, sent in the User-Agent header
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// Agent token evaluated against robots.txt groups
    #[serde(rename = "robots-agent")]
    pub robots_agent: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "RippleRank".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            robots_agent: "*".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the HTTP User-Agent header value: `Name/Version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

/// What the crawler does when a host's robots.txt cannot be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnavailablePolicy {
    /// Treat every path on the host as allowed
    #[default]
    Allow,
    /// Treat every path on the host as disallowed
    Deny,
}

/// Robots.txt handling configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    #[serde(rename = "unavailable-policy")]
    pub unavailable_policy: UnavailablePolicy,
}
