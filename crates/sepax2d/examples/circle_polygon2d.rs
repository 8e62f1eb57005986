use sepax2d::math::{Point, Vector};
use sepax2d::query;
use sepax2d::shape::{AxisAlignedRectangle, Circle};

fn main() {
    let wall = AxisAlignedRectangle::new(Point::new(0.0, 0.0), Vector::new(2.0, 6.0)).to_rectangle();

    // Facing the right side of the wall.
    let ball = Circle::new(Point::new(1.5, 0.0), 1.0);
    let sep = query::separation(&wall.as_shape(), &ball.as_shape()).unwrap();
    assert_eq!(sep.direction, Vector::x());
    assert_eq!(sep.depth, 0.5);

    // Near the top-right corner: the separation follows the corner-to-center line.
    let ball = Circle::new(Point::new(1.3, 3.4), 1.0);
    let sep = query::separation(&wall.as_shape(), &ball.as_shape()).unwrap();
    println!("corner separation: {:?}", sep);
    assert!((sep.direction - Vector::new(0.6, 0.8)).norm() <= 1.0e-5);
    assert!((sep.depth - 0.5).abs() <= 1.0e-5);

    // Far away from the wall.
    let ball = Circle::new(Point::new(3.0, 0.0), 1.0);
    assert!(!query::intersection_test(&wall.as_shape(), &ball.as_shape()));
}
