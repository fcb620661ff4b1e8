//! Convenience methods for constructing axis grids and evaluation lattices.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// # Panics
/// * If `n` is 0
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Generates `n` points spaced `step` apart, centered on `center`.
///
/// For odd `n` the center itself is one of the points, which gives the
/// usual central-difference stencils.
pub fn stencil<T>(center: T, step: T, n: usize) -> Vec<T>
where
    T: Float,
{
    // Integer offsets 0, 1, 2, ... counted in T, so no cast can fail
    let offsets: Vec<T> = core::iter::successors(Some(T::zero()), |k| Some(*k + T::one()))
        .take(n)
        .collect();
    let half = match offsets.last() {
        Some(&last) => last / (T::one() + T::one()),
        None => return offsets,
    };
    offsets
        .into_iter()
        .map(|k| center + (k - half) * step)
        .collect()
}

/// Generates a meshgrid in C ordering (x0, y0, z0, x0, y0, z1, ..., x0, yn, zn)
pub fn meshgrid<T>(x: Vec<&Vec<T>>) -> Vec<Vec<T>>
where
    T: Float,
{
    x.into_iter()
        .multi_cartesian_product()
        .map(|xx| xx.iter().map(|y| **y).collect())
        .collect()
}
