//! Operators in spherical coordinates `(r, theta, phi)`, with `theta` the polar angle
//! measured from the `z` axis and `phi` the azimuth.
//!
//! Metric factors divide by `r` and `sin(theta)` of the evaluation point, so both
//! operators diverge at the origin and on the polar axis (`theta` = 0 or pi).
//! This is not checked; evaluating there yields `inf` or `NaN`.
use num_traits::Float;

use super::{Operator3D, GRADIENT_ORDER, LAPLACIAN_ORDER};
use crate::{Axis, DiffOp, Error, Point3};

operator_3d!(
    /// Gradient `(df/dr, (1/r) df/dtheta, 1/(r sin(theta)) df/dphi)`.
    SphericalGradient,
    (r, theta, phi)
);

impl<T: Float> Operator3D<T> for SphericalGradient<T> {
    const ORDER: usize = GRADIENT_ORDER;
    type Output = Point3<T>;

    fn op(&self) -> &DiffOp<T> {
        &self.op
    }

    #[inline]
    fn eval(&self, r_vals: &[T], theta_vals: &[T], phi_vals: &[T]) -> Result<Point3<T>, Error> {
        let Point3 { q1: r, q2: theta, .. } = self.op.point();

        Ok(Point3 {
            q1: self.op.eval_axis(Axis::Q1, 1, r_vals)?,
            q2: self.op.eval_axis(Axis::Q2, 1, theta_vals)? / r,
            q3: self.op.eval_axis(Axis::Q3, 1, phi_vals)? / (r * theta.sin()),
        })
    }
}

operator_3d!(
    /// Laplacian
    ///
    /// ```text
    ///   1/(r^2 sin^2(theta)) d2f/dphi2
    /// + 1/(r^2 tan(theta))   df/dtheta
    /// + 1/r^2                d2f/dtheta2
    /// + 2/r                  df/dr
    /// +                      d2f/dr2
    /// ```
    SphericalLaplacian,
    (r, theta, phi)
);

impl<T: Float> Operator3D<T> for SphericalLaplacian<T> {
    const ORDER: usize = LAPLACIAN_ORDER;
    type Output = T;

    fn op(&self) -> &DiffOp<T> {
        &self.op
    }

    #[inline]
    fn eval(&self, r_vals: &[T], theta_vals: &[T], phi_vals: &[T]) -> Result<T, Error> {
        let Point3 { q1: r, q2: theta, .. } = self.op.point();
        let (s, c) = theta.sin_cos();
        let two = T::one() + T::one();

        let dr = self.op.eval_axis(Axis::Q1, 1, r_vals)?;
        let d2r = self.op.eval_axis(Axis::Q1, 2, r_vals)?;
        let dtheta = self.op.eval_axis(Axis::Q2, 1, theta_vals)?;
        let d2theta = self.op.eval_axis(Axis::Q2, 2, theta_vals)?;
        let d2phi = self.op.eval_axis(Axis::Q3, 2, phi_vals)?;

        // Angular part, still to be divided by r^2
        let angular = (d2phi / s + dtheta * c) / s + d2theta;

        Ok((angular / r + two * dr) / r + d2r)
    }
}
