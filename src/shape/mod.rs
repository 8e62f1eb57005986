//! Shapes supported by sepax.

pub use self::axis_aligned_rectangle::AxisAlignedRectangle;
pub use self::circle::Circle;
pub use self::rectangle::Rectangle;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};

#[cfg(feature = "alloc")]
pub use self::convex_polygon::{ConvexPolygon, ConvexPolygonError};

mod axis_aligned_rectangle;
mod circle;
mod rectangle;
#[doc(hidden)]
pub mod shape;

#[cfg(feature = "alloc")]
mod convex_polygon;
