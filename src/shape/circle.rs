use crate::math::{Isometry, Point, Real};
use crate::query::{self, Separation};
use crate::shape::Shape;

/// A circle shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Circle {
    /// The center of the circle.
    pub center: Point<Real>,
    /// The radius of the circle.
    pub radius: Real,
}

impl Circle {
    /// Creates a new circle with the given center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Circle {
        debug_assert!(radius >= 0.0, "A circle radius must not be negative.");
        Circle { center, radius }
    }

    /// Is `pt` inside of this circle, boundary included?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        (pt - self.center).norm_squared() <= self.radius * self.radius
    }

    /// This circle moved by the rigid transformation `pos`.
    #[inline]
    pub fn transformed(&self, pos: &Isometry<Real>) -> Self {
        Circle {
            center: pos * self.center,
            radius: self.radius,
        }
    }

    /// This circle, viewed as a [`Shape`].
    #[inline]
    pub fn as_shape(&self) -> Shape<'static> {
        Shape::Circle(*self)
    }

    /// Does this circle overlap `other`?
    #[inline]
    pub fn overlaps(&self, other: &Shape) -> bool {
        query::intersection_test(&self.as_shape(), other)
    }

    /// The separation between this circle and `other`, if they overlap.
    ///
    /// The separation direction points from this circle toward `other`.
    #[inline]
    pub fn separation(&self, other: &Shape) -> Option<Separation> {
        query::separation(&self.as_shape(), other)
    }
}
