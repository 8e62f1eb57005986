use super::Axis;
use crate::math::{Point, Real};
use crate::query::Separation;
use crate::utils;

/// Tests whether two convex polygons overlap, using only the given candidate axes.
///
/// Returns `false` as soon as an axis separates the projections of the two polygons.
/// Touching polygons are considered overlapping.
///
/// The answer is only exact if `axes` contains the edge normals of both polygons. When they
/// are stored separately, calling this once per axis set and combining the results with `&&`
/// is equivalent to passing their union.
///
/// Both polygons must be convex and wound counter-clockwise.
#[inline]
pub fn polygons_overlap(p1: &[Point<Real>], p2: &[Point<Real>], axes: &[Axis]) -> bool {
    utils::debug_assert_ccw(p1);
    utils::debug_assert_ccw(p2);

    axes.iter()
        .all(|axis| axis.project(p1).overlaps(&axis.project(p2)))
}

/// Finds the edge normal of `p1` along which `p2` penetrates `p1` the least.
///
/// For each edge of `p1`, the penetration depth of `p2` along the edge's outward normal is the
/// distance from the edge's supporting line to the deepest vertex of `p2`.
///
/// # Returns
///
/// - If one of these depths is negative, the corresponding normal is a separating axis: the
///   search stops and returns that normal along with its negative depth.
/// - Otherwise, returns the normal with the smallest depth. This normal points from `p1` toward
///   `p2`: moving `p1` by `-direction * depth` resolves the overlap along this axis.
///
/// This only tests the normals of `p1`. A complete test must also check the normals of `p2`,
/// as [`polygons_overlap_mtv`] does.
pub fn polygon_polygon_find_mtv_oneway(p1: &[Point<Real>], p2: &[Point<Real>]) -> Separation {
    let mut best = Separation::new(Default::default(), Real::MAX);

    for (a, b) in utils::polygon_edges(p1) {
        let axis = Axis::edge_normal(a, b);
        let deepest2 = axis.project(p2).min();
        let depth = axis.coordinate(b) - deepest2;

        if depth < 0.0 {
            return Separation::new(*axis.direction(), depth);
        }

        if depth < best.depth {
            best = Separation::new(*axis.direction(), depth);
        }
    }

    best
}

/// Computes the minimum translation vector separating two overlapping convex polygons.
///
/// The edge normals of `p1` are tested against `p2`, then the edge normals of `p2` against
/// `p1`. Each face normal set only finds separating axes aligned with its own polygon's faces,
/// but together they cover every separating axis two convex polygons can have.
///
/// Returns `None` if the polygons don't overlap. Touching polygons give a zero depth.
/// Otherwise, the direction points from `p1` toward `p2`, so translating `p1` by
/// `-direction * depth` separates the polygons. On equal depths, the normal of `p1` is kept.
///
/// Both polygons must be convex and wound counter-clockwise.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use sepax2d::math::{Point, Vector};
/// use sepax2d::query::sat;
///
/// let square = |x: f32, y: f32| {
///     [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]]
///         .map(|[dx, dy]| Point::new(x + dx, y + dy))
/// };
///
/// let mtv = sat::polygons_overlap_mtv(&square(0.0, 0.0), &square(1.5, 0.0)).unwrap();
/// assert_eq!(mtv.direction, Vector::x());
/// assert_eq!(mtv.depth, 0.5);
///
/// assert!(sat::polygons_overlap_mtv(&square(0.0, 0.0), &square(2.5, 0.0)).is_none());
/// # }
/// ```
pub fn polygons_overlap_mtv(p1: &[Point<Real>], p2: &[Point<Real>]) -> Option<Separation> {
    utils::debug_assert_ccw(p1);
    utils::debug_assert_ccw(p2);

    let sep1 = polygon_polygon_find_mtv_oneway(p1, p2);
    if !sep1.is_overlapping() {
        return None;
    }

    let sep2 = polygon_polygon_find_mtv_oneway(p2, p1);
    if !sep2.is_overlapping() {
        return None;
    }

    if sep2.depth < sep1.depth {
        Some(sep2.flipped())
    } else {
        Some(sep1)
    }
}
