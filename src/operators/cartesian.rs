//! Operators in Cartesian coordinates `(x, y, z)`, where all metric factors are 1.
use num_traits::Float;

use super::{Operator3D, GRADIENT_ORDER, LAPLACIAN_ORDER};
use crate::{Axis, DiffOp, Error, Point3};

operator_3d!(
    /// Gradient `(df/dx, df/dy, df/dz)`.
    CartesianGradient,
    (x, y, z)
);

impl<T: Float> Operator3D<T> for CartesianGradient<T> {
    const ORDER: usize = GRADIENT_ORDER;
    type Output = Point3<T>;

    fn op(&self) -> &DiffOp<T> {
        &self.op
    }

    #[inline]
    fn eval(&self, x_vals: &[T], y_vals: &[T], z_vals: &[T]) -> Result<Point3<T>, Error> {
        Ok(Point3 {
            q1: self.op.eval_axis(Axis::Q1, 1, x_vals)?,
            q2: self.op.eval_axis(Axis::Q2, 1, y_vals)?,
            q3: self.op.eval_axis(Axis::Q3, 1, z_vals)?,
        })
    }
}

operator_3d!(
    /// Laplacian `d2f/dx2 + d2f/dy2 + d2f/dz2`.
    CartesianLaplacian,
    (x, y, z)
);

impl<T: Float> Operator3D<T> for CartesianLaplacian<T> {
    const ORDER: usize = LAPLACIAN_ORDER;
    type Output = T;

    fn op(&self) -> &DiffOp<T> {
        &self.op
    }

    #[inline]
    fn eval(&self, x_vals: &[T], y_vals: &[T], z_vals: &[T]) -> Result<T, Error> {
        let d2x = self.op.eval_axis(Axis::Q1, 2, x_vals)?;
        let d2y = self.op.eval_axis(Axis::Q2, 2, y_vals)?;
        let d2z = self.op.eval_axis(Axis::Q3, 2, z_vals)?;

        Ok(d2x + d2y + d2z)
    }
}
