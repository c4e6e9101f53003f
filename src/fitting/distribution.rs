use super::Family;
use super::Moments;
use super::Parameters;
use crate::Energy;
use crate::Error;
use crate::Value;

/// A fully parameterized candidate from one of the three families.
///
/// Constructors reject parameters under which the density is not a
/// proper distribution, with the one exception of [`Distribution::point`],
/// the zero-width Uniform used for clusters without spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    Normal { mean: Value, stddev: Value },
    Uniform { min: Value, max: Value },
    Exponential { lambda: Value },
}

impl Distribution {
    pub fn normal(mean: Value, stddev: Value) -> Result<Self, Error> {
        if !mean.is_finite() {
            return Err(Error::degenerate(Family::Normal, format!("mean {}", mean)));
        }
        if !(stddev.is_finite() && stddev > 0.) {
            return Err(Error::degenerate(Family::Normal, format!("stddev {}", stddev)));
        }
        Ok(Self::Normal { mean, stddev })
    }

    pub fn uniform(min: Value, max: Value) -> Result<Self, Error> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(Error::degenerate(
                Family::Uniform,
                format!("support [{}, {}]", min, max),
            ));
        }
        Ok(Self::Uniform { min, max })
    }

    pub fn exponential(lambda: Value) -> Result<Self, Error> {
        if !(lambda.is_finite() && lambda > 0.) {
            return Err(Error::degenerate(Family::Exponential, format!("rate {}", lambda)));
        }
        Ok(Self::Exponential { lambda })
    }

    /// Uniform collapsed onto a single value
    pub fn point(x: Value) -> Self {
        Self::Uniform { min: x, max: x }
    }

    /// closed-form estimate of a family from summary statistics.
    /// Normal takes the mean and sample stddev, Uniform the range,
    /// Exponential the reciprocal of the mean.
    pub fn estimate(family: Family, moments: &Moments) -> Result<Self, Error> {
        match family {
            Family::Normal => Self::normal(moments.mean, moments.stddev),
            Family::Uniform => Self::uniform(moments.min, moments.max),
            Family::Exponential if moments.mean <= 0. => Err(Error::degenerate(
                Family::Exponential,
                format!("mean {} is not positive", moments.mean),
            )),
            Family::Exponential => Self::exponential(moments.mean.recip()),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Self::Normal { .. } => Family::Normal,
            Self::Uniform { .. } => Family::Uniform,
            Self::Exponential { .. } => Family::Exponential,
        }
    }

    pub fn parameters(&self) -> Parameters {
        match *self {
            Self::Normal { mean, stddev } => vec![("Mean", mean), ("StdDev", stddev)],
            Self::Uniform { min, max } => vec![("Min", min), ("Max", max)],
            Self::Exponential { lambda } => vec![("Lambda", lambda)],
        }
        .into()
    }

    /// natural log of the density at x, computed analytically so that
    /// far tails give a large negative number rather than ln(0).
    pub fn ln_density(&self, x: Value) -> Energy {
        match *self {
            Self::Normal { mean, stddev } => {
                let z = (x - mean) / stddev;
                -0.5 * (std::f64::consts::TAU).ln() - stddev.ln() - 0.5 * z * z
            }
            Self::Uniform { min, max } if x < min || x > max => Energy::NEG_INFINITY,
            Self::Uniform { min, max } => -(max - min).ln(),
            Self::Exponential { .. } if x < 0. => Energy::NEG_INFINITY,
            Self::Exponential { lambda } => lambda.ln() - lambda * x,
        }
    }

    /// negative log-likelihood of the values, lower is better
    pub fn nll(&self, values: &[Value]) -> Energy {
        -values.iter().map(|&x| self.ln_density(x)).sum::<Energy>()
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.family(), self.parameters())
    }
}
