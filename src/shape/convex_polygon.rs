use crate::math::{Isometry, Point, Real};
use crate::query::sat::{self, Axis};
use crate::query::{self, Separation};
use crate::shape::Shape;
use crate::utils::{self, Orientation};
use alloc::vec::Vec;
use na::ComplexField;

/// Error returned when building a [`ConvexPolygon`] from invalid vertices.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvexPolygonError {
    /// A polygon needs at least three vertices.
    #[error("a convex polygon needs at least 3 vertices, found {0}.")]
    TooFewVertices(usize),
    /// The edge ending at the given vertex has a zero length.
    #[error("the edge ending at the vertex {0} is degenerate.")]
    DegenerateEdge(usize),
    /// The polygon turns clockwise at the given vertex: it is either wound clockwise or not convex.
    #[error("the polygon turns clockwise at the vertex {0}: it must be convex and counter-clockwise.")]
    NotConvexCcw(usize),
}

/// A 2D convex polygon owning its vertices and edge normals.
///
/// Unlike the borrowed vertex slices accepted by the [`sat`] functions, a `ConvexPolygon` is
/// validated once at construction: every separating-axis query it runs is then guaranteed to
/// get a convex, counter-clockwise polygon.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    points: Vec<Point<Real>>,
    axes: Vec<Axis>,
}

impl ConvexPolygon {
    /// Creates a new 2D convex polygon from a set of points assumed to describe a
    /// counter-clockwise convex polyline.
    ///
    /// Vertices lying on the segment joining their neighbors are removed.
    /// Returns an error if fewer than three vertices remain, if two consecutive vertices are
    /// equal, or if the polyline turns clockwise at any vertex.
    pub fn from_convex_polyline(mut points: Vec<Point<Real>>) -> Result<Self, ConvexPolygonError> {
        if points.len() < 3 {
            log::debug!("Rejected a convex polygon with {} vertices.", points.len());
            return Err(ConvexPolygonError::TooFewVertices(points.len()));
        }

        let mut axes = Vec::with_capacity(points.len());

        // First, compute all normals.
        for (i, (a, b)) in utils::polygon_edges(&points).enumerate() {
            let Some(normal) = utils::ccw_face_normal([a, b]) else {
                log::debug!("Rejected a convex polygon with a degenerate edge ending at {}.", i);
                return Err(ConvexPolygonError::DegenerateEdge(i));
            };
            axes.push(Axis::from_unit(normal));
        }

        // Second, find vertices that can be removed because of collinearity of adjacent edges,
        // and reject the ones where the polyline turns clockwise. The vertex `i` joins the edges
        // `i` and `i + 1`. Nearly parallel edges are merged before the turn is checked, so
        // rounding errors on collinear vertices don't reject the polygon.
        let eps = ComplexField::sqrt(crate::math::DEFAULT_EPSILON);
        let n = points.len();
        let mut keep = Vec::with_capacity(n);

        for i in 0..n {
            let n1 = axes[i].direction();
            let n2 = axes[(i + 1) % n].direction();

            if n1.dot(n2) > 1.0 - eps {
                keep.push(false);
                continue;
            }

            let prev = &points[(i + n - 1) % n];
            let next = &points[(i + 1) % n];

            match utils::corner_direction(prev, &points[i], next) {
                Orientation::Clockwise => {
                    log::debug!("Rejected a convex polygon turning clockwise at {}.", i);
                    return Err(ConvexPolygonError::NotConvexCcw(i));
                }
                // Edges folding back onto each other.
                Orientation::Collinear => keep.push(false),
                Orientation::CounterClockwise => keep.push(true),
            }
        }

        let nremoved = keep.iter().filter(|k| !**k).count();
        if nremoved > 0 {
            log::debug!("Removed {} collinear vertices from a convex polygon.", nremoved);

            let mut kept = keep.iter().copied();
            points.retain(|_| kept.next().unwrap_or(true));
        }

        if points.len() < 3 {
            log::debug!("Rejected a flat convex polygon.");
            return Err(ConvexPolygonError::TooFewVertices(points.len()));
        }

        if nremoved > 0 {
            axes.clear();
            axes.extend(Axis::edge_normals(&points));
        }

        Ok(ConvexPolygon { points, axes })
    }

    /// The vertices of this convex polygon, in counter-clockwise order.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The outward normals of the edges of this convex polygon.
    ///
    /// The `i`-th normal belongs to the edge going from the vertex `i - 1` to the vertex `i`.
    #[inline]
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Is `pt` inside of this polygon, boundary included?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        sat::polygon_contains(&self.points, pt, &self.axes)
    }

    /// This polygon moved by the rigid transformation `pos`.
    pub fn transformed(&self, pos: &Isometry<Real>) -> Self {
        ConvexPolygon {
            points: self.points.iter().map(|pt| pos * pt).collect(),
            axes: self
                .axes
                .iter()
                .map(|axis| Axis::new(pos * axis.direction()))
                .collect(),
        }
    }

    /// This polygon, viewed as a [`Shape`].
    #[inline]
    pub fn as_shape(&self) -> Shape<'_> {
        Shape::Polygon {
            vertices: &self.points,
            axes: &self.axes,
        }
    }

    /// Does this polygon overlap `other`?
    #[inline]
    pub fn overlaps(&self, other: &Shape) -> bool {
        query::intersection_test(&self.as_shape(), other)
    }

    /// The separation between this polygon and `other`, if they overlap.
    ///
    /// The separation direction points from this polygon toward `other`.
    #[inline]
    pub fn separation(&self, other: &Shape) -> Option<Separation> {
        query::separation(&self.as_shape(), other)
    }
}
