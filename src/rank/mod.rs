//! PageRank over a crawled link graph
//!
//! The default recurrence is the plain, undamped one:
//!
//! ```text
//! new(P) = sum over Q linking to P of score(Q) / outdeg(Q)
//! ```
//!
//! Every page starts at 1.0. Pages without outbound links (dangling pages)
//! pass their score to nobody, and that mass is not redistributed. This
//! differs from classical PageRank, which adds a damping factor (usually
//! 0.85) and a teleport term; that variant is available through
//! [`RankConfig::damping`] but is off unless configured.
//!
//! Iteration stops when the summed absolute change drops below the
//! convergence delta, or at the iteration cap. The final vector is
//! normalized to sum to 1.0.

mod outcome;

pub use outcome::RankOutcome;

use crate::config::{RankSettings, DEFAULT_CONVERGENCE_DELTA, DEFAULT_MAX_ITERATIONS};
use crate::graph::LinkGraph;
use std::collections::HashMap;

/// PageRank solver configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankConfig {
    /// Stop once the summed absolute change falls below this
    pub convergence_delta: f64,

    /// Hard cap on iterations
    pub max_iterations: usize,

    /// Classical damping; `None` keeps the undamped recurrence
    pub damping: Option<f64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            convergence_delta: DEFAULT_CONVERGENCE_DELTA,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            damping: None,
        }
    }
}

impl From<&RankSettings> for RankConfig {
    fn from(settings: &RankSettings) -> Self {
        Self {
            convergence_delta: settings.convergence_delta,
            max_iterations: settings.max_iterations,
            damping: settings.damping_factor,
        }
    }
}

/// Index-based view of the graph used during iteration
struct Adjacency<'a> {
    urls: Vec<&'a str>,
    /// For each page, the pages linking to it
    sources: Vec<Vec<usize>>,
    out_degree: Vec<usize>,
    edges: usize,
}

impl<'a> Adjacency<'a> {
    fn build(graph: &'a LinkGraph) -> Self {
        let urls: Vec<&str> = graph.pages().collect();
        let index: HashMap<&str, usize> = urls.iter().enumerate().map(|(i, u)| (*u, i)).collect();

        let mut sources = vec![Vec::new(); urls.len()];
        let mut out_degree = vec![0; urls.len()];
        let mut edges = 0;

        for (q, url) in urls.iter().enumerate() {
            let targets = graph.outbound_of(url);
            out_degree[q] = targets.len();
            for target in targets {
                if let Some(&p) = index.get(target.as_str()) {
                    sources[p].push(q);
                    edges += 1;
                }
            }
        }

        Self {
            urls,
            sources,
            out_degree,
            edges,
        }
    }
}

/// Iterative PageRank solver
#[derive(Debug, Clone, Default)]
pub struct PageRank {
    config: RankConfig,
}

impl PageRank {
    pub fn new(config: RankConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Scores every page of `graph`
    ///
    /// Deterministic for a given graph: iteration follows discovery order and
    /// ties in the output keep discovery order.
    pub fn rank(&self, graph: &LinkGraph) -> RankOutcome {
        let adjacency = Adjacency::build(graph);
        let n = adjacency.urls.len();

        if n == 0 {
            return RankOutcome::new(Vec::new(), 0, true, Vec::new());
        }

        let mut scores = vec![1.0_f64; n];
        let mut deltas = Vec::new();
        let mut iterations = 0;
        // With no edges every score would collapse to zero at once; there is
        // nothing to propagate, so the initial vector stands.
        let mut converged = adjacency.edges == 0;

        while !converged && iterations < self.config.max_iterations {
            iterations += 1;

            let next = self.step(&adjacency, &scores);
            let delta: f64 = scores
                .iter()
                .zip(&next)
                .map(|(old, new)| (old - new).abs())
                .sum();
            deltas.push(delta);

            tracing::trace!("PageRank iteration {}: delta {}", iterations, delta);

            if delta < self.config.convergence_delta {
                converged = true;
            } else {
                scores = next;
            }
        }

        if converged {
            tracing::debug!("PageRank converged after {} iterations", iterations);
        } else {
            tracing::warn!(
                "PageRank did not converge within {} iterations (last delta {:?})",
                iterations,
                deltas.last()
            );
        }

        normalize(&mut scores);

        let mut ranked: Vec<(String, f64)> = adjacency
            .urls
            .iter()
            .zip(scores)
            .map(|(url, score)| (url.to_string(), score))
            .collect();
        // sort_by is stable, so equal scores keep discovery order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        RankOutcome::new(ranked, iterations, converged, deltas)
    }

    fn step(&self, adjacency: &Adjacency<'_>, scores: &[f64]) -> Vec<f64> {
        adjacency
            .sources
            .iter()
            .map(|sources| {
                let inflow: f64 = sources
                    .iter()
                    .map(|&q| scores[q] / adjacency.out_degree[q] as f64)
                    .sum();
                match self.config.damping {
                    Some(d) => (1.0 - d) + d * inflow,
                    None => inflow,
                }
            })
            .collect()
    }
}

/// Scales `scores` to sum to 1.0
///
/// If all mass has leaked away (total zero) or the total is not finite the
/// result is the uniform distribution.
fn normalize(scores: &mut [f64]) {
    if scores.is_empty() {
        return;
    }

    let total: f64 = scores.iter().sum();
    if total > 0.0 && total.is_finite() {
        for score in scores.iter_mut() {
            *score /= total;
        }
    } else {
        let uniform = 1.0 / scores.len() as f64;
        scores.iter_mut().for_each(|s| *s = uniform);
    }
}

/// Ranks `graph` with the given configuration
pub fn rank(graph: &LinkGraph, config: RankConfig) -> RankOutcome {
    PageRank::new(config).rank(graph)
}
