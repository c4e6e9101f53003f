//! Seeded draws from the distribution families the fitter recognizes.
//!
//! Used to build fixtures for tests and benchmarks.
use crate::Value;
use rand::Rng;

/// `n` draws from Normal(mean, stddev) by the Box-Muller transform.
pub fn normal<R: Rng + ?Sized>(rng: &mut R, n: usize, mean: Value, stddev: Value) -> Vec<Value> {
    (0..n)
        .map(|_| {
            // 1 - [0, 1) keeps the log argument away from zero
            let u = 1. - rng.random::<Value>();
            let v = rng.random::<Value>();
            (-2. * u.ln()).sqrt() * (std::f64::consts::TAU * v).cos()
        })
        .map(|z| mean + stddev * z)
        .collect()
}

/// `n` draws from Uniform[min, max).
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, n: usize, min: Value, max: Value) -> Vec<Value> {
    (0..n).map(|_| rng.random_range(min..max)).collect()
}

/// `n` draws from Exponential(lambda) by inversion.
pub fn exponential<R: Rng + ?Sized>(rng: &mut R, n: usize, lambda: Value) -> Vec<Value> {
    (0..n)
        .map(|_| 1. - rng.random::<Value>())
        .map(|u| -u.ln() / lambda)
        .collect()
}
