use crate::Value;
use crate::Weight;
use crate::clustering::Cluster;
use crate::fitting::Distribution;
use crate::fitting::Family;
use crate::fitting::Parameters;
use serde::Serialize;

/// Everything reported about one surviving cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterResult {
    #[serde(rename = "cluster")]
    id: usize,
    weight: Weight,
    #[serde(rename = "distribution")]
    family: Family,
    parameters: Parameters,
    values: Vec<Value>,
}

impl ClusterResult {
    /// weight is the cluster's share of a sample of `total` values
    pub fn new(cluster: Cluster, distribution: Distribution, total: usize) -> Self {
        Self {
            id: cluster.id(),
            weight: cluster.n() as Weight / total as Weight,
            family: distribution.family(),
            parameters: distribution.parameters(),
            values: cluster.into_values(),
        }
    }
    pub fn id(&self) -> usize {
        self.id
    }
    pub fn weight(&self) -> Weight {
        self.weight
    }
    pub fn family(&self) -> Family {
        self.family
    }
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    pub fn n(&self) -> usize {
        self.values.len()
    }
}

impl std::fmt::Display for ClusterResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cluster {:>3}  n {:>6}  weight {:.4}  {:<12} {}",
            self.id,
            self.n(),
            self.weight,
            self.family,
            self.parameters
        )
    }
}
