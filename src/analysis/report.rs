use super::ClusterResult;
use crate::WEIGHT_TOLERANCE;
use crate::Weight;
use serde::Serialize;

/// The results of one analysis, ordered by cluster id.
///
/// Every sample value lives in exactly one reported cluster,
/// so the weights sum to one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    n: usize,
    k: usize,
    iterations: usize,
    converged: bool,
    results: Vec<ClusterResult>,
}

impl Report {
    pub fn new(
        n: usize,
        k: usize,
        iterations: usize,
        converged: bool,
        mut results: Vec<ClusterResult>,
    ) -> Self {
        results.sort_by_key(ClusterResult::id);
        let report = Self {
            n,
            k,
            iterations,
            converged,
            results,
        };
        debug_assert!(report.balanced(), "weights sum to {}", report.total());
        report
    }
    pub fn results(&self) -> &[ClusterResult] {
        &self.results
    }
    pub fn iter(&self) -> impl Iterator<Item = &ClusterResult> {
        self.results.iter()
    }
    pub fn len(&self) -> usize {
        self.results.len()
    }
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
    /// sample size
    pub fn n(&self) -> usize {
        self.n
    }
    /// requested cluster count
    pub fn k(&self) -> usize {
        self.k
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn converged(&self) -> bool {
        self.converged
    }
    pub fn total(&self) -> Weight {
        self.results.iter().map(ClusterResult::weight).sum()
    }
    pub fn balanced(&self) -> bool {
        (self.total() - 1.).abs() <= WEIGHT_TOLERANCE
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for result in self.results.iter() {
            writeln!(f, "{}", result)?;
        }
        Ok(())
    }
}
