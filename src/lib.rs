/*!
sepax2d
========

**sepax2d** is a 2-dimensional collision query library written with the rust
programming language. It answers overlap, containment and minimum translation
queries between convex polygons, circles and rectangles using the Separating
Axis Theorem.

All queries are pure functions over borrowed vertex slices: they never
allocate, never lock and never log, so they can be called from any number of
threads for independent shape pairs.

```rust
# #[cfg(feature = "f32")] {
use sepax2d::math::Point;
use sepax2d::query::sat;
use sepax2d::shape::AxisAlignedRectangle;

let a = AxisAlignedRectangle::new(Point::new(0.0, 0.0), [1.0, 1.0].into());
let b = AxisAlignedRectangle::new(Point::new(0.5, 0.5), [1.0, 1.0].into());

let mtv = sat::polygons_overlap_mtv(&a.vertices(), &b.vertices()).unwrap();
assert_eq!(mtv.depth, 0.5);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;
pub extern crate simba;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry2, Point2, Translation2, UnitVector2, Vector2};
    use na::UnitComplex;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitComplex<N>;

    /// The translation type.
    pub use Translation2 as Translation;
}
