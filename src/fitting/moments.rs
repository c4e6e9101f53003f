use crate::Error;
use crate::Value;

/// Summary statistics every candidate is estimated from.
///
/// `stddev` is the sample standard deviation (`n - 1` denominator)
/// and is zero for a single value. Both are accumulated without
/// intermediate overflow, so any finite sample gives finite moments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub n: usize,
    pub mean: Value,
    pub stddev: Value,
    pub min: Value,
    pub max: Value,
}

impl Moments {
    /// true when every value is identical, so no spread can be estimated
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }
}

impl TryFrom<&[Value]> for Moments {
    type Error = Error;
    fn try_from(values: &[Value]) -> Result<Self, Self::Error> {
        if values.is_empty() {
            return Err(Error::invalid("cannot summarize an empty cluster"));
        }
        let n = values.len();
        let mean = values
            .iter()
            .zip(1usize..)
            .fold(0., |mean, (x, i)| mean + (x / i as Value - mean / i as Value));
        let min = values.iter().copied().fold(Value::INFINITY, Value::min);
        let max = values.iter().copied().fold(Value::NEG_INFINITY, Value::max);
        // deviations are taken relative to the largest magnitude
        let scale = min.abs().max(max.abs());
        let stddev = match n {
            1 => 0.,
            _ if scale == 0. => 0.,
            _ => {
                let ss = values
                    .iter()
                    .map(|x| x / scale - mean / scale)
                    .map(|d| d * d)
                    .sum::<Value>();
                scale * (ss / (n - 1) as Value).sqrt()
            }
        };
        Ok(Self {
            n,
            mean,
            stddev,
            min,
            max,
        })
    }
}
