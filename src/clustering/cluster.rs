use crate::Value;

/// A non-empty group of sample values sharing a nearest centroid.
///
/// Members keep the order in which they were assigned, which is the
/// order they appear in the sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    id: usize,
    values: Vec<Value>,
}

impl Cluster {
    pub fn new(id: usize, values: Vec<Value>) -> Self {
        debug_assert!(!values.is_empty(), "clusters are never empty");
        Self { id, values }
    }
    pub fn id(&self) -> usize {
        self.id
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    pub fn n(&self) -> usize {
        self.values.len()
    }
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}
