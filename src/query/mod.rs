//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general functions provided by this module are:
//!
//! * [`query::intersection_test()`] to determine if two shapes are intersecting or not.
//! * [`query::separation()`] to compute the translation resolving the overlap of two shapes.
//!
//! Both take two [`Shape`](crate::shape::Shape) values and dispatch on the pair of shape types.
//!
//! # Specific cases
//! The functions exported by the [`sat`] submodule are the building blocks of the general
//! queries. They operate directly on vertex slices, circles and axes, and have the form
//! `[shape1]_[shape2]_[operation]()`, e.g., `polygon_circle_separation`.
//!
//! [`query::intersection_test()`]: crate::query::intersection_test()
//! [`query::separation()`]: crate::query::separation()

pub use self::intersection_test::intersection_test;
pub use self::separation::{separation, Separation};

mod intersection_test;
pub mod sat;
mod separation;
