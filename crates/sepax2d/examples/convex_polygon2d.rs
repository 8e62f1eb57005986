use sepax2d::math::Point;
use sepax2d::shape::{Circle, ConvexPolygon};

fn main() {
    let points = vec![
        Point::new(-1.0, -1.0),
        Point::new(0.0, -1.0),
        Point::new(1.0, -1.0),
        Point::new(1.0, 1.0),
        Point::new(-1.0, 1.0),
    ];

    let convex = ConvexPolygon::from_convex_polyline(points).expect("Invalid convex polygon.");
    assert!(convex.points().len() == 4);

    let circle = Circle::new(Point::new(0.0, 1.5), 1.0);
    let sep = convex
        .separation(&circle.as_shape())
        .expect("The circle should overlap the polygon.");
    assert_eq!(sep.depth, 0.5);
}
