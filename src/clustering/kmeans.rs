use super::*;
use crate::Energy;
use crate::Error;
use crate::KMEANS_MAX_ITERATIONS;
use crate::Value;
use rand::Rng;
use rand::seq::SliceRandom;

/// Lloyd's algorithm over scalar values.
///
/// # Initialization
///
/// The first `k` positions of a uniform random permutation of the sample
/// seed the centroids (sampling without replacement, not k-means++).
/// Randomness comes only from the `rng` handed to [`KMeans::partition`],
/// so a seeded generator makes the whole run reproducible.
///
/// # Iteration
///
/// 1. every value joins the centroid at minimum `|x - c|`, lowest id on ties
/// 2. every centroid that gained members moves to their mean
/// 3. stop once no centroid moved, compared exactly
///
/// Centroids that gained nothing stay put and are left out of the
/// movement check. The loop is bounded by `t` passes; if the bound is
/// reached first, the pass with the lowest inertia is returned instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMeans {
    k: usize,
    t: usize,
}

impl KMeans {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            t: KMEANS_MAX_ITERATIONS,
        }
    }
    /// override the iteration cap
    pub fn iterations(self, t: usize) -> Self {
        Self { t, ..self }
    }
    pub fn k(&self) -> usize {
        self.k
    }
    pub fn t(&self) -> usize {
        self.t
    }

    /// cluster the values, keeping only non-empty clusters in id order
    pub fn cluster<R>(&self, values: &[Value], rng: &mut R) -> Result<Vec<Cluster>, Error>
    where
        R: Rng + ?Sized,
    {
        self.partition(values, rng).map(Partition::into_clusters)
    }

    /// cluster the values and report how the run went
    pub fn partition<R>(&self, values: &[Value], rng: &mut R) -> Result<Partition, Error>
    where
        R: Rng + ?Sized,
    {
        self.validate(values)?;
        let mut centroids = self.init(values, rng);
        let mut best: Option<(Energy, Vec<usize>)> = None;
        for iteration in 1..=self.t {
            let (assignments, inertia) = Self::assign(&mut centroids, values);
            let moved = centroids
                .iter_mut()
                .map(Centroid::rotate)
                .fold(false, |any, moved| any || moved);
            log::debug!(
                "kmeans iteration {:>4}  inertia {:>14.6}  moved {}",
                iteration,
                inertia,
                moved
            );
            if !moved {
                log::info!(
                    "kmeans converged after {} iterations (k = {}, n = {})",
                    iteration,
                    self.k,
                    values.len()
                );
                return Ok(Partition::new(
                    values,
                    self.k,
                    assignments,
                    iteration,
                    true,
                    inertia,
                ));
            }
            if best.as_ref().is_none_or(|(e, _)| inertia < *e) {
                best = Some((inertia, assignments));
            }
        }
        log::warn!(
            "kmeans hit the {} iteration cap without converging, keeping the best pass",
            self.t
        );
        let (inertia, assignments) = best.expect("at least one iteration");
        Ok(Partition::new(
            values,
            self.k,
            assignments,
            self.t,
            false,
            inertia,
        ))
    }

    fn validate(&self, values: &[Value]) -> Result<(), Error> {
        if self.k == 0 {
            return Err(Error::invalid("cluster count must be positive"));
        }
        if self.t == 0 {
            return Err(Error::invalid("iteration cap must be positive"));
        }
        if values.is_empty() {
            return Err(Error::invalid("cannot cluster an empty sample"));
        }
        if self.k > values.len() {
            return Err(Error::invalid(format!(
                "cluster count {} exceeds sample size {}",
                self.k,
                values.len()
            )));
        }
        if values.iter().any(|x| !x.is_finite()) {
            return Err(Error::invalid("sample contains non-finite values"));
        }
        Ok(())
    }

    /// first k positions of a random permutation of the sample
    fn init<R>(&self, values: &[Value], rng: &mut R) -> Vec<Centroid>
    where
        R: Rng + ?Sized,
    {
        let mut order = (0..values.len()).collect::<Vec<_>>();
        order.shuffle(rng);
        order
            .into_iter()
            .take(self.k)
            .map(|i| Centroid::from(values[i]))
            .collect()
    }

    /// nearest centroid in O(k). min_by keeps the first of equal
    /// elements, so ties resolve to the lowest id.
    fn neighbor(centroids: &[Centroid], x: Value) -> (usize, Energy) {
        centroids
            .iter()
            .map(|c| (x - c.reveal()).abs())
            .enumerate()
            .min_by(|(_, d1), (_, d2)| d1.total_cmp(d2))
            .expect("at least one centroid")
    }

    /// one assignment pass. every value is absorbed into the
    /// accumulator of its nearest centroid.
    fn assign(centroids: &mut [Centroid], values: &[Value]) -> (Vec<usize>, Energy) {
        let mut inertia = 0.;
        let assignments = values
            .iter()
            .map(|&x| {
                let (j, d) = Self::neighbor(centroids, x);
                centroids[j].absorb(x);
                inertia += d * d;
                j
            })
            .collect();
        (assignments, inertia)
    }
}
