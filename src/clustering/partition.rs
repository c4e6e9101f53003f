use super::Cluster;
use crate::Energy;
use crate::Value;

/// The outcome of one clustering run.
///
/// `assignments[i]` is the cluster id of the `i`th sample value.
/// Only clusters that received at least one value are kept, so
/// `clusters().len()` may fall short of the requested `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    assignments: Vec<usize>,
    clusters: Vec<Cluster>,
    iterations: usize,
    converged: bool,
    inertia: Energy,
}

impl Partition {
    pub fn new(
        values: &[Value],
        k: usize,
        assignments: Vec<usize>,
        iterations: usize,
        converged: bool,
        inertia: Energy,
    ) -> Self {
        assert!(values.len() == assignments.len());
        let mut members = vec![Vec::new(); k];
        for (x, j) in values.iter().zip(assignments.iter()) {
            members[*j].push(*x);
        }
        let clusters = members
            .into_iter()
            .enumerate()
            .filter(|(_, xs)| !xs.is_empty())
            .map(|(j, xs)| Cluster::new(j, xs))
            .collect();
        Self {
            assignments,
            clusters,
            iterations,
            converged,
            inertia,
        }
    }
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }
    pub fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }
    /// Lloyd passes executed, including the final one that moved nothing
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    /// false when the iteration cap was hit first
    pub fn converged(&self) -> bool {
        self.converged
    }
    /// sum of squared distances from each value to the centroid it was assigned by
    pub fn inertia(&self) -> Energy {
        self.inertia
    }
}
