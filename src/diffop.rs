//! Per-axis numerical derivatives on a separable 3D stencil.
//!
//! A [`DiffOp`] is built around one evaluation point and three independent
//! 1D grids, one through the point along each coordinate axis. Each grid gets its own
//! table of Fornberg weights, so the only derivatives available are pure partials
//! `d^k f / dq_i^k` along a single axis; mixed partials are not formed.
//!
//! Coordinates are generic `(q1, q2, q3)`, so the same operator serves Cartesian,
//! cylindrical, or spherical parametrizations. The operators in [`crate::operators`]
//! attach the physical meaning and metric factors.
//!
//! Because the weights depend only on offsets from the evaluation point, an operator
//! built for one stencil can be reused at every translated copy of that stencil,
//! e.g. while sweeping over the interior of an evenly spaced lattice.
//!
//! ```rust
//! use griddiff::{Axis, DiffOp, Point3};
//!
//! let x = [0.9_f64, 1.0, 1.1];
//! let p = Point3::new(1.0, 1.0, 1.0);
//! let op = DiffOp::new(p, &x, &x, &x, 2).unwrap();
//!
//! // f(x) = x^2 sampled on the q1 grid
//! let fx: Vec<f64> = x.iter().map(|v| v * v).collect();
//! let d2 = op.eval_axis(Axis::Q1, 2, &fx).unwrap();
//! assert!((d2 - 2.0).abs() < 1e-9);
//! ```
use alloc::vec::Vec;
use core::fmt;

use num_traits::Float;
use tracing::debug;

use crate::fornberg::{apply, CoefficientTable};
use crate::Error;

/// A location in some 3D parametrization `(q1, q2, q3)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3<T> {
    pub q1: T,
    pub q2: T,
    pub q3: T,
}

impl<T> Point3<T> {
    pub fn new(q1: T, q2: T, q3: T) -> Self {
        Self { q1, q2, q3 }
    }
}

impl<T: Copy> Point3<T> {
    /// Coordinate along one axis
    #[inline]
    pub fn get(&self, axis: Axis) -> T {
        match axis {
            Axis::Q1 => self.q1,
            Axis::Q2 => self.q2,
            Axis::Q3 => self.q3,
        }
    }
}

/// Coordinate axis selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Q1,
    Q2,
    Q3,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Q1, Axis::Q2, Axis::Q3];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::Q1 => 0,
            Axis::Q2 => 1,
            Axis::Q3 => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Q1 => "q1",
            Axis::Q2 => "q2",
            Axis::Q3 => "q3",
        };
        f.write_str(name)
    }
}

/// Numerical partial derivatives along each axis through one evaluation point.
///
/// Grids may be unevenly spaced and in any order, but points on each axis must be
/// distinct. Repeated points are not detected and produce `NaN` or `inf` weights.
///
/// Function values passed to [`DiffOp::eval_axis`] must line up index-for-index
/// with the grid for that axis; a mismatched ordering gives a wrong result, not an error.
///
/// Memory Complexity
/// * O((max_order + 1) * gridsize) per axis, allocated once at construction.
///
/// Operation Complexity
/// * O(max_order * gridsize^2) per axis to build.
/// * O(gridsize) for each call to `eval_axis`.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffOp<T> {
    /// Evaluation point
    point: Point3<T>,

    /// Grid points along each axis
    grids: [Vec<T>; 3],

    /// Weights for each axis, orders `0..=max_order`
    tables: [CoefficientTable<T>; 3],

    /// Highest derivative order available on every axis
    max_order: usize,
}

impl<T: Float> DiffOp<T> {
    /// Build an operator supporting derivatives up to `max_order` on every axis,
    /// using O(max_order * gridsize^2) calculations per axis.
    ///
    /// # Errors
    /// * If any grid has fewer than 2 points
    /// * If any grid has fewer than `max_order + 1` points
    pub fn new(
        point: Point3<T>,
        q1: &[T],
        q2: &[T],
        q3: &[T],
        max_order: usize,
    ) -> Result<Self, Error> {
        let grids = [q1, q2, q3];

        for axis in Axis::ALL {
            let points = grids[axis.index()].len();
            if points < 2 {
                return Err(Error::GridTooSmall { axis, points });
            }
            if points <= max_order {
                return Err(Error::GridTooCoarse {
                    axis,
                    points,
                    max_order,
                });
            }
        }

        let tables = [
            CoefficientTable::new(point.q1, q1, max_order)?,
            CoefficientTable::new(point.q2, q2, max_order)?,
            CoefficientTable::new(point.q3, q3, max_order)?,
        ];

        debug!(
            q1_points = q1.len(),
            q2_points = q2.len(),
            q3_points = q3.len(),
            max_order,
            "built finite-difference tables"
        );

        Ok(Self {
            point,
            grids: [q1.to_vec(), q2.to_vec(), q3.to_vec()],
            tables,
            max_order,
        })
    }

    /// Estimate `d^order f / dq^order` along `axis` at the evaluation point,
    /// given `f` sampled at each point of that axis's grid, in grid order.
    ///
    /// # Errors
    /// * If `order` is higher than the operator was built for
    /// * If the number of values differs from the number of grid points on `axis`
    #[inline]
    pub fn eval_axis(&self, axis: Axis, order: usize, vals: &[T]) -> Result<T, Error> {
        if order > self.max_order {
            return Err(Error::OrderTooHigh {
                order,
                max_order: self.max_order,
            });
        }

        let table = &self.tables[axis.index()];
        if vals.len() != table.npoints() {
            return Err(Error::SampleCount {
                axis,
                expected: table.npoints(),
                actual: vals.len(),
            });
        }

        apply(table.row(order)?, vals)
    }

    /// Evaluation point
    pub fn point(&self) -> Point3<T> {
        self.point
    }

    /// Grid points along `axis`
    pub fn grid(&self, axis: Axis) -> &[T] {
        &self.grids[axis.index()]
    }

    /// Finite-difference weights for `axis`
    pub fn table(&self, axis: Axis) -> &CoefficientTable<T> {
        &self.tables[axis.index()]
    }

    /// Highest derivative order available on every axis
    pub fn max_order(&self) -> usize {
        self.max_order
    }
}

#[cfg(test)]
mod test {
    use super::{Axis, DiffOp, Point3};
    use crate::utils::{linspace, stencil};
    use crate::Error;

    use ndarray::Array3;

    #[test]
    fn test_grid_size_validation() {
        let p = Point3::new(0.0_f64, 0.0, 0.0);
        let two = [-0.1, 0.1];
        let three = [-0.1, 0.0, 0.1];

        assert_eq!(
            DiffOp::new(p, &two, &three, &three, 2),
            Err(Error::GridTooCoarse {
                axis: Axis::Q1,
                points: 2,
                max_order: 2
            })
        );
        assert_eq!(
            DiffOp::new(p, &three, &three, &two, 2),
            Err(Error::GridTooCoarse {
                axis: Axis::Q3,
                points: 2,
                max_order: 2
            })
        );
        assert_eq!(
            DiffOp::new(p, &three, &[0.0], &three, 0),
            Err(Error::GridTooSmall {
                axis: Axis::Q2,
                points: 1
            })
        );
        assert!(DiffOp::new(p, &three, &three, &three, 2).is_ok());
        assert!(DiffOp::new(p, &two, &two, &two, 1).is_ok());
    }

    #[test]
    fn test_eval_axis_usage_errors() {
        let p = Point3::new(0.0_f64, 0.0, 0.0);
        let g = [-0.2, -0.1, 0.0, 0.1, 0.2];
        let op = DiffOp::new(p, &g, &g[..3], &g, 2).unwrap();

        assert_eq!(
            op.eval_axis(Axis::Q1, 3, &g),
            Err(Error::OrderTooHigh {
                order: 3,
                max_order: 2
            })
        );
        assert_eq!(
            op.eval_axis(Axis::Q2, 1, &g),
            Err(Error::SampleCount {
                axis: Axis::Q2,
                expected: 3,
                actual: 5
            })
        );
        assert_eq!(
            op.eval_axis(Axis::Q1, 1, &g[..4]),
            Err(Error::SampleCount {
                axis: Axis::Q1,
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn test_axes_are_independent() {
        let p = Point3::new(1.0_f64, -2.0, 0.5);
        let q1 = stencil(p.q1, 0.1, 5);
        let q2 = [-2.3, -2.1, -2.0, -1.6];
        let q3 = linspace(0.0, 1.0, 7);
        let op = DiffOp::new(p, &q1, &q2, &q3, 3).unwrap();

        for axis in Axis::ALL {
            assert_eq!(op.grid(axis).len(), op.table(axis).npoints());
            assert_eq!(op.table(axis).max_order(), 3);
        }
        assert_eq!(op.point(), p);

        // Cubic along each axis: d/dq q^3 = 3 q^2, d3/dq3 q^3 = 6
        for axis in Axis::ALL {
            let vals: Vec<f64> = op.grid(axis).iter().map(|q| q.powi(3)).collect();
            let q0 = p.get(axis);
            let d1 = op.eval_axis(axis, 1, &vals).unwrap();
            let d3 = op.eval_axis(axis, 3, &vals).unwrap();
            assert!((d1 - 3.0 * q0 * q0).abs() < 1e-9, "{axis}: {d1}");
            assert!((d3 - 6.0).abs() < 1e-6, "{axis}: {d3}");
        }
    }

    #[test]
    fn test_clone_is_deep() {
        let p = Point3::new(0.0_f64, 0.0, 0.0);
        let g = [-0.1, 0.0, 0.1];
        let a = DiffOp::new(p, &g, &g, &g, 2).unwrap();
        let mut b = DiffOp::new(Point3::new(1.0, 1.0, 1.0), &[0.5, 1.0, 1.5, 2.0], &g, &g, 1)
            .unwrap();

        b.clone_from(&a);
        assert_eq!(a, b);
        drop(a);

        let vals = [0.01, 0.0, 0.01];
        assert!((b.eval_axis(Axis::Q3, 2, &vals).unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_shared_across_threads() {
        let p = Point3::new(0.0_f64, 0.0, 0.0);
        let g = stencil(0.0, 0.1, 5);
        let op = DiffOp::new(p, &g, &g, &g, 2).unwrap();

        std::thread::scope(|s| {
            for axis in Axis::ALL {
                let op = &op;
                s.spawn(move || {
                    let vals: Vec<f64> = op.grid(axis).iter().map(|q| q * q).collect();
                    let d2 = op.eval_axis(axis, 2, &vals).unwrap();
                    assert!((d2 - 2.0).abs() < 1e-9);
                });
            }
        });
    }

    /// Sweep one operator over the interior of a lattice, relying on the
    /// weights being unchanged by translation.
    #[test]
    fn test_reuse_across_translated_lattice() {
        let n = 12;
        let h = 0.05;
        let x = linspace(0.0, h * (n - 1) as f64, n);
        let f = |x: f64, y: f64, z: f64| x * x * y + z.powi(3) - 2.0 * y * y;
        let field = Array3::from_shape_fn((n, n, n), |(i, j, k)| f(x[i], x[j], x[k]));

        // Local stencil centered on zero
        let local = stencil(0.0, h, 5);
        let op = DiffOp::new(Point3::new(0.0, 0.0, 0.0), &local, &local, &local, 2).unwrap();

        for i in 2..n - 2 {
            for j in 2..n - 2 {
                for k in 2..n - 2 {
                    let fx: Vec<f64> = (i - 2..=i + 2).map(|ii| field[[ii, j, k]]).collect();
                    let fy: Vec<f64> = (j - 2..=j + 2).map(|jj| field[[i, jj, k]]).collect();
                    let fz: Vec<f64> = (k - 2..=k + 2).map(|kk| field[[i, j, kk]]).collect();
                    let (x0, y0, z0) = (x[i], x[j], x[k]);

                    let dfdx = op.eval_axis(Axis::Q1, 1, &fx).unwrap();
                    let d2fdy2 = op.eval_axis(Axis::Q2, 2, &fy).unwrap();
                    let d2fdz2 = op.eval_axis(Axis::Q3, 2, &fz).unwrap();

                    assert!((dfdx - 2.0 * x0 * y0).abs() < 1e-9);
                    assert!((d2fdy2 + 4.0).abs() < 1e-8);
                    assert!((d2fdz2 - 6.0 * z0).abs() < 1e-8);
                }
            }
        }
    }
}
