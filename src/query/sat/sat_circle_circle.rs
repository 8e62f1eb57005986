use crate::math::{Real, Vector};
use crate::query::Separation;
use crate::shape::Circle;
use num::Zero;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Tests whether two circles overlap. Touching circles are considered overlapping.
#[inline]
pub fn circle_circle_overlaps(c1: &Circle, c2: &Circle) -> bool {
    let distance_squared = (c2.center - c1.center).norm_squared();
    let sum_radius = c1.radius + c2.radius;
    distance_squared <= sum_radius * sum_radius
}

/// Computes the separation between two overlapping circles.
///
/// Returns `None` if the circles don't overlap. The direction points from the center of `c1`
/// toward the center of `c2`; if both centers coincide, the `+y` direction is picked.
#[inline]
pub fn circle_circle_separation(c1: &Circle, c2: &Circle) -> Option<Separation> {
    let center12 = c2.center - c1.center;
    let distance_squared = center12.norm_squared();
    let sum_radius = c1.radius + c2.radius;

    if distance_squared > sum_radius * sum_radius {
        return None;
    }

    let (direction, distance) = if distance_squared.is_zero() {
        (Vector::y(), 0.0)
    } else {
        let distance: Real = distance_squared.sqrt();
        (center12 / distance, distance)
    };

    Some(Separation::new(direction, sum_radius - distance))
}
