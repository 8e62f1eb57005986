//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::intersection_test;
