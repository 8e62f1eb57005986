use crate::math::{Point, Real};
use crate::query::sat::{self, Axis};
use crate::query::{self, Separation};
use crate::shape::Circle;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A circle shape.
    Circle = 0,
    /// A convex polygon, including rectangles.
    Polygon,
}

/// A shape taking part in a collision query.
///
/// Polygons are borrowed: a `Shape` is a cheap view over a [`Circle`], a
/// [`Rectangle`](crate::shape::Rectangle), an
/// [`AxisAlignedRectangle`](crate::shape::AxisAlignedRectangle) turned into a `Rectangle`, a
/// `ConvexPolygon`, or any user-provided counter-clockwise convex vertex slice.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape<'a> {
    /// A circle.
    Circle(Circle),
    /// A convex polygon wound counter-clockwise.
    Polygon {
        /// The vertices of the polygon.
        vertices: &'a [Point<Real>],
        /// The axes generated by the polygon, usually its outward edge normals.
        ///
        /// Only the polygon's own axes take part in the boolean tests, so leaving out an edge
        /// normal may report overlaps that do not exist.
        axes: &'a [Axis],
    },
}

impl<'a> Shape<'a> {
    /// The type of this shape.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Polygon { .. } => ShapeType::Polygon,
        }
    }

    /// Converts this shape into a circle, if it is one.
    #[inline]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(circle) => Some(circle),
            Shape::Polygon { .. } => None,
        }
    }

    /// The vertices of this shape, if it is a polygon.
    #[inline]
    pub fn vertices(&self) -> Option<&'a [Point<Real>]> {
        match *self {
            Shape::Circle(_) => None,
            Shape::Polygon { vertices, .. } => Some(vertices),
        }
    }

    /// The axes of this shape, if it is a polygon.
    #[inline]
    pub fn axes(&self) -> Option<&'a [Axis]> {
        match *self {
            Shape::Circle(_) => None,
            Shape::Polygon { axes, .. } => Some(axes),
        }
    }

    /// Is `pt` inside of this shape, boundary included?
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        match self {
            Shape::Circle(circle) => circle.contains_point(pt),
            Shape::Polygon { vertices, axes } => sat::polygon_contains(vertices, pt, axes),
        }
    }

    /// Does this shape intersect `other`? Touching shapes intersect.
    #[inline]
    pub fn intersects(&self, other: &Shape) -> bool {
        query::intersection_test(self, other)
    }

    /// The separation between this shape and `other`, if they overlap.
    ///
    /// The separation direction points from this shape toward `other`.
    #[inline]
    pub fn separation(&self, other: &Shape) -> Option<Separation> {
        query::separation(self, other)
    }
}

impl From<Circle> for Shape<'static> {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
