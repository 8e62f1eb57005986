use super::Projection;
use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::Circle;
use crate::utils::{self, VectorOps};

/// A direction shapes are projected on to look for a separating axis.
///
/// # Invariant
///
/// The direction is always a unit vector. The only exception is an axis built from a
/// degenerate (zero-length) vector: its direction is then the zero vector and every shape
/// projects to `[0, 0]` on it. Queries never build such axes from valid polygons.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Axis {
    direction: Vector<Real>,
}

impl Axis {
    /// Creates an axis directed along `dir`, which doesn't have to be normalized.
    #[inline]
    pub fn new(dir: Vector<Real>) -> Self {
        Self {
            direction: dir.unit_or_zero(),
        }
    }

    /// Creates an axis from an already normalized direction.
    #[inline]
    pub fn from_unit(dir: UnitVector<Real>) -> Self {
        Self {
            direction: dir.into_inner(),
        }
    }

    /// The outward normal of the edge going from `a` to `b` of a counter-clockwise polygon.
    #[inline]
    pub fn edge_normal(a: &Point<Real>, b: &Point<Real>) -> Self {
        Self {
            direction: utils::ccw_face_normal_unchecked(a, b),
        }
    }

    /// The outward normals of all the edges of a counter-clockwise polygon.
    ///
    /// The `i`-th axis is the normal of the edge going from the vertex `i - 1` to the vertex `i`.
    #[inline]
    pub fn edge_normals(vertices: &[Point<Real>]) -> impl Iterator<Item = Axis> + '_ {
        utils::polygon_edges(vertices).map(|(a, b)| Self::edge_normal(a, b))
    }

    /// The unit direction of this axis.
    #[inline]
    pub fn direction(&self) -> &Vector<Real> {
        &self.direction
    }

    /// The same axis, pointing the other way.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            direction: -self.direction,
        }
    }

    /// The coordinate of `pt` along this axis.
    #[inline]
    pub fn coordinate(&self, pt: &Point<Real>) -> Real {
        pt.coords.dot(&self.direction)
    }

    /// Projects a set of vertices on this axis.
    ///
    /// The vertex set must not be empty. This is checked in debug mode only; in release mode,
    /// projecting an empty set gives `[0, 0]`.
    #[inline]
    pub fn project(&self, vertices: &[Point<Real>]) -> Projection {
        debug_assert!(!vertices.is_empty(), "Cannot project an empty vertex set.");

        let Some((first, rest)) = vertices.split_first() else {
            return Projection::point(0.0);
        };

        let mut min = self.coordinate(first);
        let mut max = min;

        for pt in rest {
            let coord = self.coordinate(pt);

            if coord < min {
                min = coord;
            } else if coord > max {
                max = coord;
            }
        }

        Projection::new(min, max)
    }

    /// Projects a single point on this axis, giving a degenerate interval.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Projection {
        Projection::point(self.coordinate(pt))
    }

    /// Projects a circle on this axis.
    #[inline]
    pub fn project_circle(&self, circle: &Circle) -> Projection {
        let center = self.coordinate(&circle.center);
        Projection::new(center - circle.radius, center + circle.radius)
    }
}

impl From<UnitVector<Real>> for Axis {
    #[inline]
    fn from(dir: UnitVector<Real>) -> Self {
        Self::from_unit(dir)
    }
}
