use super::Axis;
use crate::math::{Point, Real, Vector};
use crate::query::Separation;
use crate::shape::Circle;
use crate::utils::{self, VectorOps};

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Does the center of `circle` project onto the segment `[a, b]` itself, rather than onto the
/// rest of its supporting line?
#[inline]
fn center_faces_edge(a: &Point<Real>, b: &Point<Real>, circle: &Circle) -> bool {
    let edge_axis = Axis::new(b - a);
    edge_axis
        .project(&[*a, *b])
        .overlaps(&edge_axis.project_point(&circle.center))
}

/// Tests whether a convex polygon and a circle overlap.
///
/// Each edge is tested in turn:
/// - if its end vertex lies inside the circle, the shapes overlap;
/// - otherwise, if the circle center faces the edge (its orthogonal projection falls on the
///   segment), the shapes overlap when the center lies within `radius` of the edge's line.
///
/// If no edge reports an overlap, the shapes still overlap when the center lies on the interior
/// side of every edge, i.e., inside the polygon. Touching shapes are considered overlapping.
///
/// The polygon must be convex and wound counter-clockwise.
pub fn polygon_circle_overlaps(polygon: &[Point<Real>], circle: &Circle) -> bool {
    utils::debug_assert_ccw(polygon);

    let mut num_interior_sides = 0;

    for (a, b) in utils::polygon_edges(polygon) {
        if circle.contains_point(b) {
            return true;
        }

        let normal = Axis::edge_normal(a, b);
        let dist = normal.coordinate(&circle.center) - normal.coordinate(b);

        if dist < 0.0 {
            num_interior_sides += 1;
        }

        if dist.abs() <= circle.radius && center_faces_edge(a, b, circle) {
            return true;
        }
    }

    !polygon.is_empty() && num_interior_sides == polygon.len()
}

/// Computes the separation between a convex polygon and an overlapping circle.
///
/// The penetration depth along each edge normal is `radius - dist`, where `dist` is the signed
/// distance from the edge's line to the circle center. If the center lies outside of the
/// polygon without facing any of the edges it is outside of, the closest polygon feature is a
/// vertex: the separation is then measured along the line joining that vertex to the center.
///
/// Returns `None` if the shapes don't overlap. Otherwise, the direction points from the polygon
/// toward the circle: translating the circle by `direction * depth` separates the shapes.
///
/// The polygon must be convex and wound counter-clockwise.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use sepax2d::math::{Point, Vector};
/// use sepax2d::query::sat;
/// use sepax2d::shape::Circle;
///
/// let square = [[-2.0, -2.0], [2.0, -2.0], [2.0, 2.0], [-2.0, 2.0]].map(Point::from);
/// let circle = Circle::new(Point::new(2.5, 0.0), 1.0);
///
/// let sep = sat::polygon_circle_separation(&square, &circle).unwrap();
/// assert_eq!(sep.direction, Vector::x());
/// assert_eq!(sep.depth, 0.5);
/// # }
/// ```
pub fn polygon_circle_separation(polygon: &[Point<Real>], circle: &Circle) -> Option<Separation> {
    utils::debug_assert_ccw(polygon);

    let mut best = Separation::new(Vector::zeros(), Real::MAX);
    let mut center_outside = false;
    let mut faces_outer_edge = false;

    for (a, b) in utils::polygon_edges(polygon) {
        let normal = Axis::edge_normal(a, b);
        let dist = normal.coordinate(&circle.center) - normal.coordinate(b);
        let depth = circle.radius - dist;

        if depth < 0.0 {
            return None;
        }

        if depth < best.depth {
            best = Separation::new(*normal.direction(), depth);
        }

        if dist > 0.0 {
            center_outside = true;
            faces_outer_edge = faces_outer_edge || center_faces_edge(a, b, circle);
        }
    }

    if center_outside && !faces_outer_edge {
        // The center lies in the region of a vertex.
        let vertex_to_center = polygon
            .iter()
            .map(|vertex| circle.center - vertex)
            .min_by(|v1, v2| v1.norm_squared().total_cmp(&v2.norm_squared()))?;
        let depth = circle.radius - vertex_to_center.norm();

        return (depth >= 0.0).then(|| Separation::new(vertex_to_center.unit_or_zero(), depth));
    }

    Some(best)
}
