//! Various unsorted geometrical operators.

pub use self::ccw_face_normal::{ccw_face_normal, ccw_face_normal_unchecked};
pub use self::orientation::{corner_direction, debug_assert_ccw, orientation, Orientation};
pub use self::polygon_edges::polygon_edges;
pub use self::vector_ops::VectorOps;

mod ccw_face_normal;
mod orientation;
mod polygon_edges;
mod vector_ops;
