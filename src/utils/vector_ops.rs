use crate::math::{Real, Vector, DEFAULT_EPSILON};

/// Extra operations with 2D vectors.
///
/// Lengths, dot products and 2D cross products are provided by nalgebra directly
/// (`norm`, `dot` and `perp`).
pub trait VectorOps {
    /// The unit vector pointing in the same direction as `self`.
    ///
    /// Returns the zero vector instead of NaNs if `self` is too small to be normalized.
    fn unit_or_zero(&self) -> Self;

    /// The unit vector perpendicular to `self`, obtained by rotating it by 90° counter-clockwise.
    ///
    /// Returns the zero vector if `self` is too small to be normalized.
    fn ccw_normal(&self) -> Self;
}

impl VectorOps for Vector<Real> {
    #[inline]
    fn unit_or_zero(&self) -> Self {
        self.try_normalize(DEFAULT_EPSILON)
            .unwrap_or_else(Vector::zeros)
    }

    #[inline]
    fn ccw_normal(&self) -> Self {
        Vector::new(-self.y, self.x).unit_or_zero()
    }
}
