use super::ClusterResult;
use super::Report;
use crate::Error;
use crate::clustering::KMeans;
use crate::fitting::Fitter;
use crate::sample::Sample;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Clusters a sample, then fits each surviving cluster independently.
///
/// The clusterer and the fitter share nothing, so the only source of
/// variation between runs on the same sample is the generator that seeds
/// the centroids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    kmeans: KMeans,
}

impl Analysis {
    pub fn new(k: usize) -> Self {
        Self {
            kmeans: KMeans::new(k),
        }
    }
    /// override the clusterer's iteration cap
    pub fn iterations(self, t: usize) -> Self {
        Self {
            kmeans: self.kmeans.iterations(t),
        }
    }

    pub fn run<R>(&self, sample: &Sample, rng: &mut R) -> Result<Report, Error>
    where
        R: Rng + ?Sized,
    {
        let partition = self.kmeans.partition(sample.values(), rng)?;
        let iterations = partition.iterations();
        let converged = partition.converged();
        let results = partition
            .into_clusters()
            .into_iter()
            .map(|cluster| {
                Fitter::fit(cluster.values())
                    .map(|distribution| ClusterResult::new(cluster, distribution, sample.n()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        for result in results.iter() {
            log::info!("{}", result);
        }
        Ok(Report::new(
            sample.n(),
            self.kmeans.k(),
            iterations,
            converged,
            results,
        ))
    }

    /// deterministic pseudo-random clustering from a seed
    pub fn seeded(&self, sample: &Sample, seed: u64) -> Result<Report, Error> {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        self.run(sample, rng)
    }
}
