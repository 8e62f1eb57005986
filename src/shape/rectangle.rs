use crate::math::{Isometry, Point, Real, Vector};
use crate::query::sat::{self, Axis};
use crate::query::{self, Separation};
use crate::shape::Shape;
use crate::utils;

/// A rectangle with an arbitrary orientation.
///
/// The rectangle is stored as its four corners, in counter-clockwise order starting from the
/// corner that is lower-left in the rectangle's own frame, along with the two unique outward
/// normals of its edges. Opposite edges are parallel, so these two normals are the only axes a
/// rectangle contributes to separating-axis tests.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Rectangle {
    vertices: [Point<Real>; 4],
    axes: [Axis; 2],
}

impl Rectangle {
    /// Creates a rectangle from its four corners.
    ///
    /// The corners must be given in counter-clockwise order: lower-left, lower-right,
    /// upper-right, upper-left. This is checked in debug mode only.
    #[inline]
    pub fn new(vertices: [Point<Real>; 4]) -> Self {
        utils::debug_assert_ccw(&vertices);

        let axes = [
            Axis::edge_normal(&vertices[0], &vertices[1]),
            Axis::edge_normal(&vertices[1], &vertices[2]),
        ];

        Self { vertices, axes }
    }

    /// Creates an axis-aligned rectangle centered at `center`.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::from_isometry(half_extents, &Isometry::translation(center.x, center.y))
    }

    /// Creates a rectangle with the given half-extents, centered and oriented by `pos`.
    #[inline]
    pub fn from_isometry(half_extents: Vector<Real>, pos: &Isometry<Real>) -> Self {
        let (hx, hy) = (half_extents.x, half_extents.y);
        let local = [[-hx, -hy], [hx, -hy], [hx, hy], [-hx, hy]];
        Self::new(local.map(|pt| pos * Point::from(pt)))
    }

    /// The four corners of this rectangle, in counter-clockwise order.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>; 4] {
        &self.vertices
    }

    /// The outward normals of the bottom and right edges of this rectangle.
    #[inline]
    pub fn axes(&self) -> &[Axis; 2] {
        &self.axes
    }

    /// The center of this rectangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.vertices[0], &self.vertices[2])
    }

    /// Is `pt` inside of this rectangle, boundary included?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        sat::polygon_contains(&self.vertices, pt, &self.axes)
    }

    /// This rectangle moved by the rigid transformation `pos`.
    #[inline]
    pub fn transformed(&self, pos: &Isometry<Real>) -> Self {
        Self::new(self.vertices.map(|pt| pos * pt))
    }

    /// This rectangle, viewed as a [`Shape`].
    #[inline]
    pub fn as_shape(&self) -> Shape<'_> {
        Shape::Polygon {
            vertices: &self.vertices,
            axes: &self.axes,
        }
    }

    /// Does this rectangle overlap `other`?
    #[inline]
    pub fn overlaps(&self, other: &Shape) -> bool {
        query::intersection_test(&self.as_shape(), other)
    }

    /// The separation between this rectangle and `other`, if they overlap.
    ///
    /// The separation direction points from this rectangle toward `other`.
    #[inline]
    pub fn separation(&self, other: &Shape) -> Option<Separation> {
        query::separation(&self.as_shape(), other)
    }
}

#[cfg(test)]
mod tests {
    use super::Rectangle;
    use crate::math::{Isometry, Point, Real, Vector};

    #[test]
    fn vertices_are_ccw_from_lower_left() {
        let rect = Rectangle::from_half_extents(Point::new(1.0, 2.0), Vector::new(2.0, 1.0));
        let expected = [[-1.0, 1.0], [3.0, 1.0], [3.0, 3.0], [-1.0, 3.0]].map(Point::from);

        assert_eq!(rect.vertices(), &expected);
        assert_eq!(rect.center(), Point::new(1.0, 2.0));
        assert_eq!(*rect.axes()[0].direction(), -Vector::y());
        assert_eq!(*rect.axes()[1].direction(), Vector::x());
    }

    #[test]
    fn rotated_rectangle_contains_points() {
        let pos = Isometry::new(Vector::zeros(), core::f64::consts::FRAC_PI_4 as Real);
        let diamond = Rectangle::from_isometry(Vector::new(1.0, 1.0), &pos);

        assert!(diamond.contains_point(&Point::new(0.0, 1.4)));
        assert!(!diamond.contains_point(&Point::new(0.9, 0.9)));
        assert!(!diamond.contains_point(&Point::new(0.0, 1.5)));
    }

    #[test]
    fn rotated_rectangles_overlap() {
        let a = Rectangle::from_half_extents(Point::origin(), Vector::new(1.0, 1.0));
        let pos = Isometry::new(Vector::new(2.3, 0.0), core::f64::consts::FRAC_PI_4 as Real);
        let b = Rectangle::from_isometry(Vector::new(1.0, 1.0), &pos);
        let far = b.transformed(&Isometry::translation(0.2, 0.0));

        // The left corner of `b` lies at x = 2.3 - sqrt(2) ≈ 0.886.
        assert!(a.overlaps(&b.as_shape()));
        assert!(b.overlaps(&a.as_shape()));
        assert!(!a.overlaps(&far.as_shape()));

        let sep = a.separation(&b.as_shape()).unwrap();
        assert_relative_eq!(sep.direction, Vector::x(), epsilon = 1.0e-6);
        assert_relative_eq!(
            sep.depth,
            1.0 - (2.3 - Real::sqrt(2.0)),
            epsilon = 1.0e-5
        );
    }
}
