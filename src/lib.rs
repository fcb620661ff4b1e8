//! Numerical gradients and Laplacians at a point, from function values sampled on
//! arbitrarily spaced grids in Cartesian, cylindrical, or spherical coordinates.
//! The core is no-std compatible and the coefficient engine performs no allocation.
//!
//! # Structure
//! * [`fornberg`] generates finite-difference weights for every derivative order up to
//!   a maximum on a single unevenly spaced 1D grid.
//! * [`DiffOp`] owns one table of weights per coordinate axis and evaluates pure partial
//!   derivatives `d^k f / dq_i^k` along any one axis.
//! * [`operators`] wraps a `DiffOp` into gradients and Laplacians with the metric
//!   factors of each coordinate system.
//!
//! The grids are separable: each axis is an independent 1D stencil passing through the
//! evaluation point, so mixed partial derivatives are not available.
//!
//! # Performance Scalings
//!
//! | Operation                     | RAM                        | Cost                         |
//! |-------------------------------|----------------------------|------------------------------|
//! | fornberg::weights             | none beyond output         | O(max_order * n^2)           |
//! | DiffOp::new                   | O(max_order * n) per axis  | O(max_order * n^2) per axis  |
//! | DiffOp::eval_axis             | none                       | O(n)                         |
//! | operator `eval`               | none                       | O(n) per axis term           |
//!
//! Weights depend only on the offsets between the grid and the evaluation point, so a
//! single operator can be reused over every translated copy of its stencil.
//!
//! # Example: Laplacian on a Cartesian stencil
//! ```rust
//! use griddiff::{CartesianLaplacian, Operator3D, Point3};
//!
//! // Five points spaced 0.1 apart along each axis, centered on (1, 1, 1)
//! let g = [0.8_f64, 0.9, 1.0, 1.1, 1.2];
//! let lap = CartesianLaplacian::new(Point3::new(1.0, 1.0, 1.0), &g, &g, &g).unwrap();
//!
//! // f(x, y, z) = x^2 + y^2 + z^2, sampled along each axis through (1, 1, 1)
//! let line: Vec<f64> = g.iter().map(|v| v * v + 2.0).collect();
//! let out = lap.eval(&line, &line, &line).unwrap();
//! assert!((out - 6.0).abs() < 1e-9);
//! ```
//!
//! # Example: Gradient in spherical coordinates
//! ```rust
//! use griddiff::{Operator3D, Point3, SphericalGradient};
//!
//! let p = Point3::new(2.0_f64, 1.0, 0.5); // (r, theta, phi)
//! let r = [1.9, 2.0, 2.1];
//! let theta = [0.95, 1.0, 1.05];
//! let phi = [0.45, 0.5, 0.55];
//! let grad = SphericalGradient::new(p, &r, &theta, &phi).unwrap();
//!
//! // f = r depends on r only
//! let fr: Vec<f64> = r.to_vec();
//! let g = grad.eval(&fr, &[2.0; 3], &[2.0; 3]).unwrap();
//! assert!((g.q1 - 1.0).abs() < 1e-12 && g.q2.abs() < 1e-12 && g.q3.abs() < 1e-12);
//! ```
//!
//! # Numerical Hazards
//! The following are caller preconditions and are not checked. They produce `NaN` or
//! infinite results, never memory unsafety:
//! * Repeated points within one axis grid
//! * Evaluation on a coordinate singularity: `rho = 0` (cylindrical),
//!   `r = 0` or `theta` in `{0, pi}` (spherical)
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

extern crate alloc;

pub mod error;
pub use error::Error;

pub mod fornberg;
pub use fornberg::CoefficientTable;

pub mod diffop;
pub use diffop::{Axis, DiffOp, Point3};

pub mod operators;
pub use operators::{
    cartesian::CartesianGradient, cartesian::CartesianLaplacian,
    cylindrical::CylindricalGradient, cylindrical::CylindricalLaplacian,
    spherical::SphericalGradient, spherical::SphericalLaplacian, Operator3D,
};

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
