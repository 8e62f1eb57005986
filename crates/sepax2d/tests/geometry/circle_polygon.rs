use sepax2d::math::{Isometry, Point, Real, Vector};
use sepax2d::query::{self, sat};
use sepax2d::shape::{AxisAlignedRectangle, Circle, Rectangle};

fn regular_polygon<const N: usize>(
    center: Point<Real>,
    radius: Real,
    angle: Real,
) -> [Point<Real>; N] {
    core::array::from_fn(|i| {
        let theta = angle + i as Real * core::f32::consts::TAU / N as Real;
        center + Vector::new(theta.cos(), theta.sin()) * radius
    })
}

#[test]
fn circle_touching_square_edge() {
    let circle = Circle::new(Point::origin(), 5.0);
    let touching = AxisAlignedRectangle::new(Point::new(6.0, 0.0), Vector::new(2.0, 2.0));
    let apart = AxisAlignedRectangle::new(Point::new(6.0001, 0.0), Vector::new(2.0, 2.0));

    assert!(sat::polygon_circle_overlaps(&touching.vertices(), &circle));
    assert!(!sat::polygon_circle_overlaps(&apart.vertices(), &circle));
    assert!(circle.overlaps(&touching.to_rectangle().as_shape()));
    assert!(!circle.overlaps(&apart.to_rectangle().as_shape()));

    let sep = circle
        .separation(&touching.to_rectangle().as_shape())
        .unwrap();
    assert_eq!(sep.depth, 0.0);
    assert_eq!(sep.direction, Vector::x());
}

#[test]
fn circle_near_rotated_rectangle_corner() {
    let pos = Isometry::new(Vector::zeros(), core::f32::consts::FRAC_PI_4);
    let diamond = Rectangle::from_isometry(Vector::new(1.0, 1.0), &pos);
    let corner_x = Real::sqrt(2.0);

    let overlapping = Circle::new(Point::new(corner_x + 0.5, 0.0), 0.6);
    let separated = Circle::new(Point::new(corner_x + 0.5, 0.0), 0.4);

    assert!(overlapping.overlaps(&diamond.as_shape()));
    assert!(!separated.overlaps(&diamond.as_shape()));

    let sep = query::separation(&diamond.as_shape(), &overlapping.as_shape()).unwrap();
    assert_relative_eq!(sep.direction, Vector::x(), epsilon = 1.0e-5);
    assert_relative_eq!(sep.depth, 0.1, epsilon = 1.0e-5);
}

#[test]
fn pushing_circle_out_resolves_overlap() {
    let mut rng = oorandom::Rand32::new(42);
    let mut num_overlaps = 0;

    for _ in 0..1000 {
        let polygon: [_; 5] = regular_polygon(
            Point::new(rng.rand_float() * 2.0 - 1.0, rng.rand_float() * 2.0 - 1.0),
            0.5 + rng.rand_float() * 2.0,
            rng.rand_float() * core::f32::consts::TAU,
        );
        let circle = Circle::new(
            Point::new(rng.rand_float() * 8.0 - 4.0, rng.rand_float() * 8.0 - 4.0),
            0.1 + rng.rand_float() * 1.5,
        );

        let overlaps = sat::polygon_circle_overlaps(&polygon, &circle);
        let sep = sat::polygon_circle_separation(&polygon, &circle);
        assert_eq!(overlaps, sep.is_some(), "{polygon:?} {circle:?}");

        if let Some(sep) = sep {
            num_overlaps += 1;
            assert!(sep.depth >= 0.0);
            assert_relative_eq!(sep.direction.norm(), 1.0, epsilon = 1.0e-5);

            let pushed = Circle::new(circle.center + sep.translation(), circle.radius);

            if let Some(remaining) = sat::polygon_circle_separation(&polygon, &pushed) {
                assert!(remaining.depth <= 1.0e-3, "{polygon:?} {circle:?} {sep:?}");
            }
        }
    }

    assert!(num_overlaps > 100);
}
