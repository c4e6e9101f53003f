use crate::Error;
use crate::Value;

/// An ordered, non-empty sequence of finite measurements.
///
/// Position is the only identity a value has; duplicates are fine.
/// Construction is the one place where emptiness and finiteness are checked,
/// so everything downstream can assume both.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample(Vec<Value>);

impl Sample {
    pub fn values(&self) -> &[Value] {
        &self.0
    }
    pub fn n(&self) -> usize {
        self.0.len()
    }
    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl TryFrom<Vec<Value>> for Sample {
    type Error = Error;
    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        if values.is_empty() {
            return Err(Error::invalid("sample is empty"));
        }
        match values.iter().position(|x| !x.is_finite()) {
            Some(i) => Err(Error::invalid(format!(
                "sample value #{} is not finite ({})",
                i, values[i]
            ))),
            None => Ok(Self(values)),
        }
    }
}

impl TryFrom<&[Value]> for Sample {
    type Error = Error;
    fn try_from(values: &[Value]) -> Result<Self, Self::Error> {
        Self::try_from(values.to_vec())
    }
}

impl AsRef<[Value]> for Sample {
    fn as_ref(&self) -> &[Value] {
        &self.0
    }
}
