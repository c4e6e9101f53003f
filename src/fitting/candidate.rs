use super::Distribution;
use super::Family;
use crate::Energy;
use crate::Value;
use std::cmp::Ordering;

/// A distribution together with its negative log-likelihood on the
/// values it was estimated from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    distribution: Distribution,
    score: Energy,
}

impl Candidate {
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }
    pub fn family(&self) -> Family {
        self.distribution.family()
    }
    pub fn score(&self) -> Energy {
        self.score
    }
    /// lower score first, family priority on exact ties
    pub fn rank(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.family().cmp(&other.family()))
    }
}

impl From<(Distribution, &[Value])> for Candidate {
    fn from((distribution, values): (Distribution, &[Value])) -> Self {
        Self {
            distribution,
            score: distribution.nll(values),
        }
    }
}
