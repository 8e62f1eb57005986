//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! The **Separating Axis Theorem (SAT)** states that two convex shapes do **not** intersect if
//! and only if there exists an axis onto which the projections of the two shapes do not overlap.
//!
//! For two convex polygons, it is sufficient to test the edge normals of both polygons: if none
//! of them separates the projections, the polygons overlap. The normal along which the overlap
//! is the smallest gives the minimum translation vector resolving the collision.
//!
//! # How Does SAT Work Here?
//!
//! 1. **Select candidate axes**: the outward edge normals of the polygons (see
//!    [`Axis::edge_normals`]). A rectangle only needs two of its four normals since opposite
//!    edges are parallel. A circle contributes the direction from the polygon vertex closest
//!    to its center.
//!
//! 2. **Project both shapes onto each axis**: [`Axis::project`] computes the [`Projection`]
//!    interval covered by a vertex set in one pass.
//!
//! 3. **Check for overlap**: if the projections don't overlap on some axis, the shapes don't
//!    collide. Touching projections count as overlapping.
//!
//! 4. **Find minimum penetration**: the axis with the smallest overlap gives the
//!    [`Separation`](crate::query::Separation) returned by the `*_mtv` and `*_separation`
//!    functions.
//!
//! # Preconditions
//!
//! Polygons are given as borrowed vertex slices. They must be convex, non-degenerate, and wound
//! counter-clockwise: the interior is on the left of each edge, and the `i`-th edge goes from
//! vertex `i - 1` to vertex `i`. This is only checked by debug assertions: in release mode,
//! malformed polygons give wrong answers instead of errors.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "f32")] {
//! use sepax2d::math::Point;
//! use sepax2d::query::sat::{self, Axis};
//!
//! let tri = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)];
//! let square = [
//!     Point::new(1.0, 1.0),
//!     Point::new(2.0, 1.0),
//!     Point::new(2.0, 2.0),
//!     Point::new(1.0, 2.0),
//! ];
//!
//! // Boolean test: gather the axes of both polygons.
//! let axes: Vec<Axis> = Axis::edge_normals(&tri)
//!     .chain(Axis::edge_normals(&square))
//!     .collect();
//! assert!(sat::polygons_overlap(&tri, &square, &axes));
//!
//! // Resolvable collision: the axes are derived from the polygons directly.
//! let mtv = sat::polygons_overlap_mtv(&square, &tri).unwrap();
//! assert!(mtv.depth > 0.0);
//! # }
//! ```

pub use self::axis::Axis;
pub use self::projection::Projection;
pub use self::sat_circle_circle::{circle_circle_overlaps, circle_circle_separation};
pub use self::sat_polygon_circle::{polygon_circle_overlaps, polygon_circle_separation};
pub use self::sat_polygon_point::polygon_contains;
pub use self::sat_polygon_polygon::{
    polygon_polygon_find_mtv_oneway, polygons_overlap, polygons_overlap_mtv,
};

mod axis;
mod projection;
mod sat_circle_circle;
mod sat_polygon_circle;
mod sat_polygon_point;
mod sat_polygon_polygon;
