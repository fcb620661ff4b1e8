//! Finite-difference weights on arbitrarily spaced 1D grids.
//!
//! Given an evaluation point `x0` and `n` distinct abscissas, [`weights`] fills a
//! row-major `(max_order + 1) x n` table `c` such that
//!
//! ```text
//! sum_i c[k][i] * f(points[i]) ~= d^k f / dx^k (x0),    k = 0..=max_order
//! ```
//!
//! exactly for polynomials of degree below `n`. Row 0 holds interpolation weights.
//!
//! Points are folded in one at a time, updating every order at once, so the
//! cost is O(n^2 * max_order) with no scratch storage beyond the output table.
//! Only the offsets `points[i] - x0` enter the recurrence; a table computed for one
//! stencil is valid for every translated copy of it.
//!
//! ```rust
//! use griddiff::fornberg;
//!
//! // Three-point central stencil with spacing h = 0.5
//! let points = [-0.5_f64, 0.0, 0.5];
//! let mut c = [0.0; 9];
//! fornberg::weights(0.0, &points, 2, &mut c).unwrap();
//!
//! let d1 = fornberg::row(&c, points.len(), 1);
//! assert!((d1[0] + 1.0).abs() < 1e-12 && (d1[2] - 1.0).abs() < 1e-12);
//! ```
//!
//! Repeated abscissas divide by zero and leave `NaN` or `inf` in the table.
//! This is not checked.
//!
//! References
//! * B. Fornberg, "Generation of finite difference formulas on arbitrarily spaced grids",
//!   Math. Comp. 51 (1988), 699-706.
use alloc::vec;
use alloc::vec::Vec;

use num_traits::{Float, NumCast};

use crate::Error;

/// Fill `out` with finite-difference weights for derivative orders `0..=max_order`
/// at `x0`, laid out row-major with one row of `points.len()` weights per order.
///
/// Does not allocate.
///
/// # Errors
/// * If there are fewer points than `max_order + 1`
/// * If `out.len() != (max_order + 1) * points.len()`
#[inline]
pub fn weights<T: Float>(
    x0: T,
    points: &[T],
    max_order: usize,
    out: &mut [T],
) -> Result<(), Error> {
    let n = points.len();
    if n <= max_order {
        return Err(Error::TooFewPoints {
            points: n,
            max_order,
        });
    }
    let expected = (max_order + 1).checked_mul(n).ok_or(Error::Unrepresentable)?;
    if out.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: out.len(),
        });
    }

    out.iter_mut().for_each(|c| *c = T::zero());
    out[0] = T::one();

    // Product of (points[i-1] - points[j]) over j < i-1, carried between iterations
    let mut a = T::one();
    let mut dx = points[0] - x0;

    for i in 1..n {
        let mut b = T::one();
        let dx_prev = dx;
        dx = points[i] - x0;
        let top = i.min(max_order);

        for j in 0..i {
            let dij = points[i] - points[j];
            b = b * dij;

            // Weights of the new point depend on the previous point's weights
            // from the last pass, so they must be taken before that row is updated below.
            if j == i - 1 {
                for k in (1..=top).rev() {
                    let kf = <T as NumCast>::from(k).ok_or(Error::Unrepresentable)?;
                    out[k * n + i] =
                        a * (kf * out[(k - 1) * n + i - 1] - dx_prev * out[k * n + i - 1]) / b;
                }
                out[i] = -a * dx_prev * out[i - 1] / b;
            }

            for k in (1..=top).rev() {
                let kf = <T as NumCast>::from(k).ok_or(Error::Unrepresentable)?;
                out[k * n + j] = (dx * out[k * n + j] - kf * out[(k - 1) * n + j]) / dij;
            }
            out[j] = dx * out[j] / dij;
        }

        a = b;
    }

    Ok(())
}

/// Weights for derivative order `k` from a table of `n` points per row.
///
/// Panics if the table does not have a row `k`.
#[inline]
pub fn row<T>(coeffs: &[T], n: usize, k: usize) -> &[T] {
    &coeffs[k * n..(k + 1) * n]
}

/// Weight of point `i` for derivative order `k` from a table of `n` points per row.
///
/// Panics if the entry is out of bounds.
#[inline]
pub fn coeff<T: Copy>(coeffs: &[T], n: usize, i: usize, k: usize) -> T {
    coeffs[k * n + i]
}

/// Apply one row of weights to function values sampled at the grid points,
/// in grid order.
///
/// # Errors
/// * If the row and the values have different lengths
#[inline]
pub fn apply<T: Float>(row: &[T], vals: &[T]) -> Result<T, Error> {
    if row.len() != vals.len() {
        return Err(Error::LengthMismatch {
            expected: row.len(),
            actual: vals.len(),
        });
    }

    let mut acc = T::zero();
    for i in 0..row.len() {
        acc = acc + row[i] * vals[i];
    }

    Ok(acc)
}

/// An owned table of finite-difference weights for one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientTable<T> {
    /// Grid points per row
    n: usize,

    /// Highest derivative order; there are `max_order + 1` rows
    max_order: usize,

    /// Row-major weights, size `(max_order + 1) * n`
    coeffs: Vec<T>,
}

impl<T: Float> CoefficientTable<T> {
    /// Compute the weights for orders `0..=max_order` at `x0`.
    ///
    /// # Errors
    /// * If there are fewer points than `max_order + 1`
    pub fn new(x0: T, points: &[T], max_order: usize) -> Result<Self, Error> {
        let n = points.len();
        if n <= max_order {
            return Err(Error::TooFewPoints {
                points: n,
                max_order,
            });
        }
        let mut coeffs = vec![T::zero(); (max_order + 1) * n];
        weights(x0, points, max_order, &mut coeffs)?;

        Ok(Self {
            n,
            max_order,
            coeffs,
        })
    }

    /// Number of grid points, which is also the length of each row.
    pub fn npoints(&self) -> usize {
        self.n
    }

    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// The whole table, row-major.
    pub fn as_slice(&self) -> &[T] {
        &self.coeffs
    }

    /// Weights for derivative order `k`.
    ///
    /// # Errors
    /// * If `k` is larger than the order the table was built for
    #[inline]
    pub fn row(&self, k: usize) -> Result<&[T], Error> {
        if k > self.max_order {
            return Err(Error::OrderTooHigh {
                order: k,
                max_order: self.max_order,
            });
        }
        Ok(row(&self.coeffs, self.n, k))
    }

    /// Weight of point `i` for derivative order `k`, if both are in range.
    #[inline]
    pub fn coeff(&self, i: usize, k: usize) -> Option<T> {
        (i < self.n && k <= self.max_order).then(|| coeff(&self.coeffs, self.n, i, k))
    }

    /// Estimate the order-`k` derivative at `x0` from values sampled at the grid points.
    ///
    /// # Errors
    /// * If `k` is larger than the order the table was built for
    /// * If the number of values differs from the number of grid points
    #[inline]
    pub fn derivative(&self, k: usize, vals: &[T]) -> Result<T, Error> {
        apply(self.row(k)?, vals)
    }
}
