use crate::math::{Real, Vector};

/// How far, and in which direction, two overlapping shapes must be moved apart.
///
/// This is the minimum translation vector of the overlap, split into a direction and a
/// depth. The direction points from the first shape of the query toward the second one:
/// moving the first shape by `-direction * depth`, or the second by `direction * depth`,
/// leaves the shapes touching but no longer overlapping.
///
/// # Invariant
///
/// `direction` is either a unit vector or the zero vector.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Separation {
    /// Unit direction pointing from the first shape toward the second.
    pub direction: Vector<Real>,
    /// The penetration depth along `direction`.
    ///
    /// Queries returning an `Option<Separation>` always give a non-negative depth. The
    /// one-way polygon passes use a negative depth to signal a separating axis.
    pub depth: Real,
}

impl Separation {
    /// Creates a new separation.
    #[inline]
    pub fn new(direction: Vector<Real>, depth: Real) -> Self {
        Separation { direction, depth }
    }

    /// A separation requiring no motion at all.
    #[inline]
    pub fn zero() -> Self {
        Separation {
            direction: Vector::zeros(),
            depth: 0.0,
        }
    }

    /// Does this describe an actual overlap, i.e., is its depth non-negative?
    ///
    /// Touching shapes have a zero depth and are considered overlapping.
    #[inline]
    pub fn is_overlapping(&self) -> bool {
        self.depth >= 0.0
    }

    /// The translation to apply to the second shape to resolve the overlap,
    /// i.e., `direction * depth`.
    #[inline]
    pub fn translation(&self) -> Vector<Real> {
        self.direction * self.depth
    }

    /// Reverses the direction of this separation, so it applies to the swapped pair of shapes.
    #[inline]
    pub fn flip(&mut self) {
        self.direction = -self.direction;
    }

    /// Returns this separation with its direction reversed.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}
