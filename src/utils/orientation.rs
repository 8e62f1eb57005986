//! Winding of polygons and corners.

use crate::math::{Point, Real};
use core::cmp::Ordering;

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The orientation or winding direction of a corner or polygon.
pub enum Orientation {
    /// Clockwise.
    Clockwise,
    /// Counter-clockwise: the interior lies on the left of each directed edge.
    CounterClockwise,
    /// Neither (a straight line).
    Collinear,
}

/// Returns the direction of a line through `p1`, `p2` and `p3`.
///
/// Counter-clockwise example:
/// ```text
///           o p3
///         .
///       .
/// o . . o
/// p1    p2
/// ```
///
/// Clockwise example:
/// ```text
/// p1    p2
/// o . . o
///       .
///         .
///           o p3
/// ```
///
/// A NaN coordinate yields [`Orientation::Collinear`].
#[inline]
pub fn corner_direction(p1: &Point<Real>, p2: &Point<Real>, p3: &Point<Real>) -> Orientation {
    let cross: Real = (p2 - p1).perp(&(p3 - p1));

    match cross.partial_cmp(&0.0) {
        Some(Ordering::Greater) => Orientation::CounterClockwise,
        Some(Ordering::Less) => Orientation::Clockwise,
        Some(Ordering::Equal) | None => Orientation::Collinear,
    }
}

/// The winding of a convex polygon.
///
/// Only the first three vertices are inspected: the polygon is assumed to be strictly convex
/// so every corner shares the winding of the first one.
///
/// The polygon must have at least three vertices. This is checked in debug mode only;
/// in release mode a smaller polygon is reported as [`Orientation::Collinear`].
#[inline]
pub fn orientation(vertices: &[Point<Real>]) -> Orientation {
    debug_assert!(
        vertices.len() > 2,
        "A polygon needs at least three vertices, found {}.",
        vertices.len()
    );

    match vertices {
        [p1, p2, p3, ..] => corner_direction(p1, p2, p3),
        _ => Orientation::Collinear,
    }
}

/// Checks, in debug mode only, that `vertices` describe a counter-clockwise polygon.
///
/// Every separating-axis query calls this on the polygons it is given. The check compiles
/// to nothing in release mode: feeding a clockwise or degenerate polygon to a query there
/// silently yields a wrong answer. The input is never re-wound.
#[inline(always)]
#[track_caller]
pub fn debug_assert_ccw(vertices: &[Point<Real>]) {
    debug_assert_eq!(
        orientation(vertices),
        Orientation::CounterClockwise,
        "The polygon {:?} must be wound counter-clockwise.",
        vertices
    );
}
