use super::Axis;
use crate::math::{Point, Real};
use crate::utils;

/// Tests whether `point` lies inside a convex polygon, boundary included.
///
/// The point is projected, along with the polygon, on every axis of `axes`: it lies outside
/// as soon as its coordinate falls out of the polygon's projection on one of them.
///
/// The answer is only exact if `axes` contains all the edge normals of `polygon`
/// (see [`Axis::edge_normals`]). The polygon must be convex and wound counter-clockwise.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use sepax2d::math::Point;
/// use sepax2d::query::sat::{self, Axis};
///
/// let square = [
///     Point::new(-1.0, -1.0),
///     Point::new(1.0, -1.0),
///     Point::new(1.0, 1.0),
///     Point::new(-1.0, 1.0),
/// ];
/// let axes = [Axis::edge_normal(&square[0], &square[1]), Axis::edge_normal(&square[1], &square[2])];
///
/// assert!(sat::polygon_contains(&square, &Point::origin(), &axes));
/// assert!(sat::polygon_contains(&square, &Point::new(1.0, 0.0), &axes));
/// assert!(!sat::polygon_contains(&square, &Point::new(1.0001, 0.0), &axes));
/// # }
/// ```
#[inline]
pub fn polygon_contains(polygon: &[Point<Real>], point: &Point<Real>, axes: &[Axis]) -> bool {
    utils::debug_assert_ccw(polygon);

    axes.iter()
        .all(|axis| axis.project(polygon).contains(axis.coordinate(point)))
}
