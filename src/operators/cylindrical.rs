//! Operators in cylindrical coordinates `(rho, phi, z)`.
//!
//! Both operators divide by the radius `rho` of the evaluation point and diverge
//! on the axis `rho = 0`. This is not checked; evaluating there yields `inf` or `NaN`.
use num_traits::Float;

use super::{Operator3D, GRADIENT_ORDER, LAPLACIAN_ORDER};
use crate::{Axis, DiffOp, Error, Point3};

operator_3d!(
    /// Gradient `(df/drho, (1/rho) df/dphi, df/dz)`.
    CylindricalGradient,
    (rho, phi, z)
);

impl<T: Float> Operator3D<T> for CylindricalGradient<T> {
    const ORDER: usize = GRADIENT_ORDER;
    type Output = Point3<T>;

    fn op(&self) -> &DiffOp<T> {
        &self.op
    }

    #[inline]
    fn eval(&self, rho_vals: &[T], phi_vals: &[T], z_vals: &[T]) -> Result<Point3<T>, Error> {
        let rho = self.op.point().q1;

        Ok(Point3 {
            q1: self.op.eval_axis(Axis::Q1, 1, rho_vals)?,
            q2: self.op.eval_axis(Axis::Q2, 1, phi_vals)? / rho,
            q3: self.op.eval_axis(Axis::Q3, 1, z_vals)?,
        })
    }
}

operator_3d!(
    /// Laplacian
    ///
    /// ```text
    /// (1/rho) df/drho + (1/rho^2) d2f/dphi2 + d2f/drho2 + d2f/dz2
    /// ```
    CylindricalLaplacian,
    (rho, phi, z)
);

impl<T: Float> Operator3D<T> for CylindricalLaplacian<T> {
    const ORDER: usize = LAPLACIAN_ORDER;
    type Output = T;

    fn op(&self) -> &DiffOp<T> {
        &self.op
    }

    #[inline]
    fn eval(&self, rho_vals: &[T], phi_vals: &[T], z_vals: &[T]) -> Result<T, Error> {
        let rho = self.op.point().q1;

        let drho = self.op.eval_axis(Axis::Q1, 1, rho_vals)?;
        let d2rho = self.op.eval_axis(Axis::Q1, 2, rho_vals)?;
        let d2phi = self.op.eval_axis(Axis::Q2, 2, phi_vals)?;
        let d2z = self.op.eval_axis(Axis::Q3, 2, z_vals)?;

        Ok((drho + d2phi / rho) / rho + d2rho + d2z)
    }
}
