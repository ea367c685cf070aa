/// Result of one PageRank run
#[derive(Debug, Clone, PartialEq)]
pub struct RankOutcome {
    scores: Vec<(String, f64)>,
    iterations: usize,
    converged: bool,
    deltas: Vec<f64>,
}

impl RankOutcome {
    pub(crate) fn new(
        scores: Vec<(String, f64)>,
        iterations: usize,
        converged: bool,
        deltas: Vec<f64>,
    ) -> Self {
        Self {
            scores,
            iterations,
            converged,
            deltas,
        }
    }

    /// `(URL, normalized score)` pairs, highest score first
    pub fn scores(&self) -> &[(String, f64)] {
        &self.scores
    }

    /// Ranked URLs, highest score first
    pub fn urls(&self) -> impl Iterator<Item = &str> + '_ {
        self.scores.iter().map(|(url, _)| url.as_str())
    }

    pub fn score_of(&self, url: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|(candidate, _)| candidate == url)
            .map(|(_, score)| *score)
    }

    /// Ranked pairs without `url`; its score still counts toward [`Self::total`]
    pub fn excluding<'a>(&'a self, url: &'a str) -> impl Iterator<Item = &'a (String, f64)> + 'a {
        self.scores.iter().filter(move |(candidate, _)| candidate != url)
    }

    /// Sum of all scores; 1.0 for any non-empty graph
    pub fn total(&self) -> f64 {
        self.scores.iter().map(|(_, score)| score).sum()
    }

    /// Iterations performed, including the one that detected convergence
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// False when the iteration cap was hit first
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Convergence delta of every iteration, in order
    pub fn deltas(&self) -> &[f64] {
        &self.deltas
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> RankOutcome {
        RankOutcome::new(
            vec![
                ("https://seed.example/".to_string(), 0.5),
                ("https://a.example/".to_string(), 0.3),
                ("https://b.example/".to_string(), 0.2),
            ],
            4,
            true,
            vec![1.0, 0.5, 0.01, 0.0001],
        )
    }

    #[test]
    fn test_excluding_removes_only_that_url() {
        let outcome = outcome();
        let rest: Vec<&str> = outcome
            .excluding("https://seed.example/")
            .map(|(url, _)| url.as_str())
            .collect();
        assert_eq!(rest, vec!["https://a.example/", "https://b.example/"]);
        assert!((outcome.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_lookup() {
        let outcome = outcome();
        assert_eq!(outcome.score_of("https://a.example/"), Some(0.3));
        assert_eq!(outcome.score_of("https://missing.example/"), None);
        assert_eq!(outcome.len(), 3);
    }
}
