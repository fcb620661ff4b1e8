//! Shared helpers for unit tests.
use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::utils::linspace;
use crate::Point3;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3, 2, 3, 8, 4, 6, 2, 6, 4, 3, 3, 8, 3, 2, 7, 9,
    5,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers in [0, 1) using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Evenly spaced points from `start` to `stop`, each moved by up to
/// `jitter / 2` in either direction.
///
/// Keep `jitter` below the nominal spacing so points stay distinct and ordered.
pub fn jittered_grid(rng: &mut StdRng, start: f64, stop: f64, n: usize, jitter: f64) -> Vec<f64> {
    linspace(start, stop, n)
        .into_iter()
        .zip(randn::<f64>(rng, n))
        .map(|(x, dx)| x + (dx - 0.5) * jitter)
        .collect()
}

/// Sample `f` along each axis line through `p`.
pub fn sample_axes<F>(f: F, p: Point3<f64>, q1: &[f64], q2: &[f64], q3: &[f64]) -> [Vec<f64>; 3]
where
    F: Fn(f64, f64, f64) -> f64,
{
    [
        q1.iter().map(|&v| f(v, p.q2, p.q3)).collect(),
        q2.iter().map(|&v| f(p.q1, v, p.q3)).collect(),
        q3.iter().map(|&v| f(p.q1, p.q2, v)).collect(),
    ]
}
