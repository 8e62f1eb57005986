use crate::query::sat;
use crate::query::Separation;
use crate::shape::Shape;

/// Computes the separation between two overlapping shapes.
///
/// Returns `None` if the shapes don't overlap. Otherwise, the returned [`Separation`] points
/// from `shape1` toward `shape2`: moving `shape1` by `-direction * depth` resolves the overlap.
/// Touching shapes overlap with a zero depth.
///
/// Swapping the two shapes flips the returned direction. Between polygons, the separation is
/// computed from the polygons' vertices only: the `axes` they carry are ignored.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use sepax2d::math::{Point, Vector};
/// use sepax2d::query;
/// use sepax2d::shape::{Circle, Rectangle};
///
/// let rect = Rectangle::from_half_extents(Point::origin(), Vector::new(1.0, 1.0));
/// let circle = Circle::new(Point::new(1.5, 0.0), 1.0);
///
/// let sep = query::separation(&rect.as_shape(), &circle.as_shape()).unwrap();
/// assert_eq!(sep.direction, Vector::x());
/// assert_eq!(sep.depth, 0.5);
///
/// let flipped = query::separation(&circle.as_shape(), &rect.as_shape()).unwrap();
/// assert_eq!(flipped.direction, -Vector::x());
/// # }
/// ```
pub fn separation(shape1: &Shape, shape2: &Shape) -> Option<Separation> {
    match (shape1, shape2) {
        (Shape::Circle(c1), Shape::Circle(c2)) => sat::circle_circle_separation(c1, c2),
        (Shape::Polygon { vertices, .. }, Shape::Circle(c2)) => {
            sat::polygon_circle_separation(vertices, c2)
        }
        (Shape::Circle(c1), Shape::Polygon { vertices, .. }) => {
            sat::polygon_circle_separation(vertices, c1).map(Separation::flipped)
        }
        (Shape::Polygon { vertices: p1, .. }, Shape::Polygon { vertices: p2, .. }) => {
            sat::polygons_overlap_mtv(p1, p2)
        }
    }
}
