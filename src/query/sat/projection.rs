use crate::math::Real;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// The interval covered by a shape once projected on an [`Axis`](super::Axis).
///
/// # Invariant
///
/// `min <= max`. This is checked with a debug assertion when the projection is created.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Projection {
    min: Real,
    max: Real,
}

impl Projection {
    /// Creates the projection covering `[min, max]`.
    #[inline]
    #[track_caller]
    pub fn new(min: Real, max: Real) -> Self {
        debug_assert!(
            min <= max,
            "Invalid projection: min ({}) > max ({}).",
            min,
            max
        );
        Self { min, max }
    }

    /// The degenerate projection `[value, value]`.
    #[inline]
    pub fn point(value: Real) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// The lower bound of this interval.
    #[inline]
    pub fn min(&self) -> Real {
        self.min
    }

    /// The upper bound of this interval.
    #[inline]
    pub fn max(&self) -> Real {
        self.max
    }

    /// The width of this interval.
    #[inline]
    pub fn length(&self) -> Real {
        self.max - self.min
    }

    /// The middle of this interval.
    #[inline]
    pub fn center(&self) -> Real {
        (self.min + self.max) * 0.5
    }

    /// Does this interval contain `value`, bounds included?
    #[inline]
    pub fn contains(&self, value: Real) -> bool {
        self.min <= value && value <= self.max
    }

    /// The signed distance between two intervals.
    ///
    /// This is the gap between the two interval centers minus the sum of their half-widths:
    /// a positive value is the size of the gap separating the intervals, a negative value
    /// means they overlap and its opposite is the penetration depth.
    #[inline]
    pub fn distance(&self, other: &Self) -> Real {
        let center_gap = ((self.min + self.max) - (other.min + other.max)).abs();
        let width_sum = self.length() + other.length();
        (center_gap - width_sum) * 0.5
    }

    /// The penetration depth of the two intervals, i.e., `-self.distance(other)`.
    #[inline]
    pub fn penetration(&self, other: &Self) -> Real {
        -self.distance(other)
    }

    /// Do these intervals overlap?
    ///
    /// Touching intervals are considered overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.distance(other) <= 0.0
    }
}
