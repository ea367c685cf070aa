//! Ripple-Rank main entry point
//!
//! This is the command-line interface for the Ripple-Rank crawler and ranker.

use clap::{Parser, ValueEnum};
use ripple_rank::config::{load_config_with_hash, validate, Config};
use ripple_rank::crawler::crawl;
use ripple_rank::output::{format_discovered, format_ranking, print_statistics};
use ripple_rank::rank::{PageRank, RankConfig};
use ripple_rank::RippleError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Ripple-Rank: a bounded, polite crawler with link-graph ranking
///
/// Ripple-Rank discovers links breadth-first from a seed URL up to a link
/// budget while respecting robots.txt, then scores the discovered pages
/// with PageRank over the link graph it built.
#[derive(Parser, Debug)]
#[command(name = "ripple-rank")]
#[command(version)]
#[command(about = "A bounded, polite crawler with link-graph ranking", long_about = None)]
struct Cli {
    /// Seed URL (overrides `seed` from the configuration file)
    #[arg(value_name = "SEED")]
    seed: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// What to print once the crawl finishes
    #[arg(short, long, value_enum, default_value_t = Mode::Rank)]
    mode: Mode,

    /// Maximum number of unique URLs to discover, seed included
    #[arg(short, long, value_name = "N")]
    budget: Option<usize>,

    /// Number of pages fetched concurrently per batch
    #[arg(short, long, value_name = "N")]
    workers: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Print crawl statistics after the run
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Print the discovered URL set
    Crawl,
    /// Crawl, then print pages by PageRank score
    Rank,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load(&cli)?;

    let seed = match cli.seed.as_deref().or(config.seed.as_deref()) {
        Some(seed) => seed.to_string(),
        None => {
            tracing::error!("No seed URL given");
            return Err(RippleError::MissingSeed.into());
        }
    };
    ripple_rank::config::validate_seed(&seed).map_err(RippleError::from)?;

    if cli.dry_run {
        handle_dry_run(&config, &seed, cli.mode);
        return Ok(());
    }

    handle_run(&config, &seed, cli.mode, cli.stats).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ripple_rank=info,warn"),
            1 => EnvFilter::new("ripple_rank=debug,info"),
            2 => EnvFilter::new("ripple_rank=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file if one was given, applies CLI overrides and
/// validates the result
fn load(cli: &Cli) -> Result<Config, RippleError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(budget) = cli.budget {
        config.crawler.link_budget = budget;
    }
    if let Some(workers) = cli.workers {
        config.crawler.worker_pool_width = workers;
    }

    validate(&config)?;
    Ok(config)
}

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config, seed: &str, mode: Mode) {
    println!("=== Ripple-Rank Dry Run ===\n");

    println!("Seed: {}", seed);
    println!("Mode: {:?}", mode);

    println!("\nCrawler Configuration:");
    println!("  Link budget: {}", config.crawler.link_budget);
    println!("  Worker pool width: {}", config.crawler.worker_pool_width);
    println!("  Fetch timeout: {}s", config.crawler.fetch_timeout_secs);

    println!("\nRanking:");
    println!("  Convergence delta: {}", config.rank.convergence_delta);
    println!("  Max iterations: {}", config.rank.max_iterations);
    match config.rank.damping_factor {
        Some(d) => println!("  Damping factor: {}", d),
        None => println!("  Damping factor: none (undamped)"),
    }

    println!("\nUser Agent:");
    println!("  Header: {}", config.user_agent.header_value());
    println!("  robots.txt agent: {}", config.user_agent.robots_agent);
    println!(
        "  Unavailable robots.txt: {:?}",
        config.robots.unavailable_policy
    );

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl and, in rank mode, the PageRank computation
async fn handle_run(config: &Config, seed: &str, mode: Mode, stats: bool) -> anyhow::Result<()> {
    tracing::info!(
        "Starting crawl from {} (budget {}, {} workers)",
        seed,
        config.crawler.link_budget,
        config.crawler.worker_pool_width
    );

    let report = match crawl(seed, config).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        "Crawl completed: {} pages discovered, {} edges",
        report.discovered.len(),
        report.graph.edge_count()
    );

    match mode {
        Mode::Crawl => {
            for line in format_discovered(&report.discovered) {
                println!("{}", line);
            }
        }
        Mode::Rank => {
            let outcome = PageRank::new(RankConfig::from(&config.rank)).rank(&report.graph);
            tracing::info!(
                "PageRank finished after {} iterations (converged: {})",
                outcome.iterations(),
                outcome.converged()
            );
            for line in format_ranking(&outcome, Some(&report.seed)) {
                println!("{}", line);
            }
        }
    }

    if stats {
        println!();
        print_statistics(&report.stats);
    }

    Ok(())
}
