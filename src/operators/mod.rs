//! Gradient and Laplacian operators in Cartesian, cylindrical, and spherical coordinates.
//! See individual modules for the coordinate conventions.
//!
//! Every operator wraps a single [`DiffOp`] built with the highest derivative order the
//! operator needs, and combines per-axis derivatives with the metric factors of its
//! coordinate system. Metric factors are taken from the evaluation point stored in the
//! `DiffOp` and recomputed on each call.
//!
//! An existing `DiffOp` can be shared between operators by cloning it into
//! [`from_op`](cartesian::CartesianLaplacian::from_op); a Laplacian's operator,
//! for example, also carries everything a gradient needs.
use num_traits::Float;

use crate::{DiffOp, Error};

/// Derivative order needed by gradients
pub const GRADIENT_ORDER: usize = 1;

/// Derivative order needed by Laplacians
pub const LAPLACIAN_ORDER: usize = 2;

/// A differential operator evaluated at a fixed point from values on three axis grids.
pub trait Operator3D<T: Float> {
    /// Highest derivative order taken along any axis
    const ORDER: usize;

    /// Scalar for Laplacians, vector components for gradients
    type Output;

    /// The underlying per-axis derivatives
    fn op(&self) -> &DiffOp<T>;

    /// Evaluate the operator from function values sampled along each axis grid,
    /// in the same order as the grids the operator was built with.
    ///
    /// # Errors
    /// * If the number of values for any axis differs from the size of that axis's grid
    fn eval(&self, q1_vals: &[T], q2_vals: &[T], q3_vals: &[T]) -> Result<Self::Output, Error>;
}

/// Declare an operator struct wrapping a `DiffOp`, with constructors named after its
/// coordinate axes. The derivative order comes from the struct's `Operator3D` impl.
macro_rules! operator_3d {
    ($(#[$meta:meta])* $name:ident, ($q1:ident, $q2:ident, $q3:ident)) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name<T> {
            op: $crate::DiffOp<T>,
        }

        impl<T: num_traits::Float> $name<T> {
            /// Build the operator at `point` from one grid per axis.
            ///
            /// # Errors
            /// * If any grid has fewer than 2 points, or too few for the operator's order
            pub fn new(
                point: $crate::Point3<T>,
                $q1: &[T],
                $q2: &[T],
                $q3: &[T],
            ) -> Result<Self, $crate::Error> {
                let order = <Self as $crate::Operator3D<T>>::ORDER;
                let op = $crate::DiffOp::new(point, $q1, $q2, $q3, order)?;
                Ok(Self { op })
            }

            /// Wrap an existing operator without recomputing its weights.
            ///
            /// # Errors
            /// * If `op` was built for derivatives of lower order than this operator needs
            pub fn from_op(op: $crate::DiffOp<T>) -> Result<Self, $crate::Error> {
                let order = <Self as $crate::Operator3D<T>>::ORDER;
                if op.max_order() < order {
                    return Err($crate::Error::OrderTooHigh {
                        order,
                        max_order: op.max_order(),
                    });
                }
                tracing::trace!(
                    operator = stringify!($name),
                    max_order = op.max_order(),
                    "wrapped existing tables"
                );
                Ok(Self { op })
            }

            /// Release the underlying per-axis operator.
            pub fn into_op(self) -> $crate::DiffOp<T> {
                self.op
            }
        }
    };
}

pub mod cartesian;
pub mod cylindrical;
pub mod spherical;
