#[macro_use]
extern crate approx;

mod circle_polygon;
#[cfg(feature = "alloc")]
mod convex_polygon;
#[cfg(feature = "alloc")]
mod polygons_mtv;
mod projection;
