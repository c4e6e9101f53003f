use super::*;
use crate::Error;
use crate::Value;

/// Picks the family that best explains one cluster's values.
///
/// Each family is estimated in closed form from the cluster's [`Moments`],
/// scored by negative log-likelihood, and the lowest score wins with
/// `Normal < Uniform < Exponential` breaking exact ties.
///
/// Candidates whose parameters are ill-defined (an Exponential over a
/// non-positive mean, a Normal without spread) sit out the comparison.
/// A cluster without spread at all, including every single-value cluster,
/// is reported as a zero-width Uniform at that value.
///
/// Pure: no state, no side effects beyond logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fitter;

impl Fitter {
    pub fn fit(values: &[Value]) -> Result<Distribution, Error> {
        let moments = Self::moments(values)?;
        if moments.is_point() {
            log::debug!("{} identical values, fitting a point at {}", moments.n, moments.min);
            return Ok(Distribution::point(moments.min));
        }
        Self::score(values, &moments)
            .into_iter()
            .min_by(Candidate::rank)
            .map(|best| *best.distribution())
            .ok_or_else(|| Error::invalid("no candidate distribution could be scored"))
    }

    /// every well-defined candidate with its score, in family order
    pub fn candidates(values: &[Value]) -> Result<Vec<Candidate>, Error> {
        let moments = Self::moments(values)?;
        Ok(Self::score(values, &moments))
    }

    fn moments(values: &[Value]) -> Result<Moments, Error> {
        if values.iter().any(|x| !x.is_finite()) {
            return Err(Error::invalid("cluster contains non-finite values"));
        }
        Moments::try_from(values)
    }

    fn score(values: &[Value], moments: &Moments) -> Vec<Candidate> {
        Family::all()
            .into_iter()
            .filter_map(|family| match Distribution::estimate(family, moments) {
                Ok(distribution) => Some(distribution),
                Err(e) => {
                    log::debug!("excluding candidate: {}", e);
                    None
                }
            })
            .map(|distribution| Candidate::from((distribution, values)))
            .inspect(|c| log::debug!("{:<12} nll {:>16.6}", c.family(), c.score()))
            .filter(|c| !c.score().is_nan())
            .collect()
    }
}
