//! Implementation details of the `separation` function.

pub use self::separation::Separation;
pub use self::separation_shape_shape::separation;

mod separation;
mod separation_shape_shape;
