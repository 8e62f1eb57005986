use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::utils::VectorOps;

/// Computes the direction pointing toward the right-hand-side of an oriented segment.
///
/// For an edge of a counter-clockwise polygon, this is the outward normal of the edge.
/// Returns `None` if the segment is degenerate.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 2]) -> Option<UnitVector<Real>> {
    let ab = *pts[1] - *pts[0];
    let res = Vector::new(ab.y, -ab.x);

    UnitVector::try_new(res, DEFAULT_EPSILON)
}

/// Same as [`ccw_face_normal`] but without the degeneracy check.
///
/// A degenerate segment yields the zero vector.
#[inline]
pub fn ccw_face_normal_unchecked(a: &Point<Real>, b: &Point<Real>) -> Vector<Real> {
    let ab = b - a;
    Vector::new(ab.y, -ab.x).unit_or_zero()
}
