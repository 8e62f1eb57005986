use crate::math::{Point, Real, Vector};
use crate::query::sat::Axis;
use crate::query::Separation;
use crate::shape::{Rectangle, Shape};

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// A rectangle with edges parallel to the coordinate axes.
///
/// # Invariant
///
/// Each component of `half_extents` is strictly positive: a flat rectangle has no
/// counter-clockwise corners and can't take part in separating-axis queries.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct AxisAlignedRectangle {
    /// The center of the rectangle.
    pub center: Point<Real>,
    /// Half of the width and height of the rectangle.
    pub half_extents: Vector<Real>,
}

impl AxisAlignedRectangle {
    /// Creates a rectangle from its center and its full width and height.
    #[inline]
    pub fn new(center: Point<Real>, dimensions: Vector<Real>) -> Self {
        Self::from_half_extents(center, dimensions * 0.5)
    }

    /// Creates a rectangle from its center and half-extents.
    ///
    /// Both half-extents must be positive. This is checked in debug mode only.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        debug_assert!(
            half_extents.x > 0.0 && half_extents.y > 0.0,
            "A rectangle must have positive extents."
        );
        Self {
            center,
            half_extents,
        }
    }

    /// Creates the rectangle covering `[mins.x, maxs.x] × [mins.y, maxs.y]`.
    #[inline]
    pub fn from_mins_maxs(mins: Point<Real>, maxs: Point<Real>) -> Self {
        Self::from_half_extents(na::center(&mins, &maxs), (maxs - mins) * 0.5)
    }

    /// The corner with the smallest coordinates.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        self.center - self.half_extents
    }

    /// The corner with the largest coordinates.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        self.center + self.half_extents
    }

    /// The width of this rectangle.
    #[inline]
    pub fn width(&self) -> Real {
        self.half_extents.x * 2.0
    }

    /// The height of this rectangle.
    #[inline]
    pub fn height(&self) -> Real {
        self.half_extents.y * 2.0
    }

    /// The four corners of this rectangle, counter-clockwise from the lower-left one.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        let (mins, maxs) = (self.mins(), self.maxs());
        [
            mins,
            Point::new(maxs.x, mins.y),
            maxs,
            Point::new(mins.x, maxs.y),
        ]
    }

    /// The two unique outward edge normals of this rectangle: `-y` and `+x`.
    #[inline]
    pub fn axes(&self) -> [Axis; 2] {
        [Axis::new(-Vector::y()), Axis::new(Vector::x())]
    }

    /// This rectangle, as a [`Rectangle`] with explicit corners.
    #[inline]
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(self.vertices())
    }

    /// Is `pt` inside of this rectangle, boundary included?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let local = pt - self.center;
        local.x.abs() <= self.half_extents.x && local.y.abs() <= self.half_extents.y
    }

    /// Does this rectangle intersect `other`? Touching rectangles intersect.
    #[inline]
    pub fn intersects(&self, other: &AxisAlignedRectangle) -> bool {
        let (mins1, maxs1) = (self.mins(), self.maxs());
        let (mins2, maxs2) = (other.mins(), other.maxs());

        mins1.x <= maxs2.x && mins2.x <= maxs1.x && mins1.y <= maxs2.y && mins2.y <= maxs1.y
    }

    /// This rectangle moved by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Self {
            center: self.center + shift,
            half_extents: self.half_extents,
        }
    }

    /// Does this rectangle overlap `other`?
    #[inline]
    pub fn overlaps(&self, other: &Shape) -> bool {
        self.to_rectangle().overlaps(other)
    }

    /// The separation between this rectangle and `other`, if they overlap.
    ///
    /// The separation direction points from this rectangle toward `other`.
    #[inline]
    pub fn separation(&self, other: &Shape) -> Option<Separation> {
        self.to_rectangle().separation(other)
    }
}
