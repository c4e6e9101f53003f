use crate::PARAMETER_DELIMITER;
use crate::Value;
use serde::Serialize;
use serde::Serializer;

/// Named parameters of a fitted distribution, in their canonical order
/// (`Mean, StdDev`; `Min, Max`; `Lambda`).
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters(Vec<(&'static str, Value)>);

impl Parameters {
    pub fn get(&self, name: &str) -> Option<Value> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, Value)> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// six decimals, or scientific notation once fixed point would
    /// either sprawl or round the value away
    fn number(x: Value) -> String {
        if x == 0. || (1e-4..1e9).contains(&x.abs()) {
            format!("{:.6}", x)
        } else {
            format!("{:.6e}", x)
        }
    }
}

impl From<Vec<(&'static str, Value)>> for Parameters {
    fn from(pairs: Vec<(&'static str, Value)>) -> Self {
        Self(pairs)
    }
}

/// `Name: value` pairs joined by [`PARAMETER_DELIMITER`].
impl std::fmt::Display for Parameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .0
            .iter()
            .map(|(name, value)| format!("{}: {}", name, Self::number(*value)))
            .collect::<Vec<_>>()
            .join(PARAMETER_DELIMITER);
        write!(f, "{}", rendered)
    }
}

/// serialized as a JSON object, keys in canonical order
impl Serialize for Parameters {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(k, v)| (*k, *v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render() {
        let p = Parameters::from(vec![("Min", 1.), ("Max", 5.5)]);
        assert_eq!(p.to_string(), "Min: 1.000000; Max: 5.500000");
        assert_eq!(p.get("Max"), Some(5.5));
        assert_eq!(p.get("Mean"), None);
    }

    #[test]
    fn magnitudes() {
        let p = Parameters::from(vec![("Min", -1.7e308), ("Max", 2.5e-7), ("Lambda", 0.)]);
        assert_eq!(
            p.to_string(),
            "Min: -1.700000e308; Max: 2.500000e-7; Lambda: 0.000000"
        );
        let p = Parameters::from(vec![("Mean", 123456789.), ("StdDev", 0.0001)]);
        assert_eq!(p.to_string(), "Mean: 123456789.000000; StdDev: 0.000100");
    }

    #[test]
    fn json() {
        let p = Parameters::from(vec![("Mean", 0.5), ("StdDev", 2.)]);
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"Mean":0.5,"StdDev":2.0}"#
        );
    }
}
