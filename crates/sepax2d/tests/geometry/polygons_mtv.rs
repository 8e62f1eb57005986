use sepax2d::math::{Point, Real, Vector};
use sepax2d::query::{self, sat};
use sepax2d::shape::{ConvexPolygon, Rectangle};

fn random_polygon(rng: &mut oorandom::Rand32) -> ConvexPolygon {
    let n = rng.rand_range(3..9);
    let center = Point::new(rng.rand_float() * 4.0 - 2.0, rng.rand_float() * 4.0 - 2.0);
    let radius = 0.5 + rng.rand_float() * 2.0;
    let angle = rng.rand_float() * core::f32::consts::TAU;

    let points = (0..n)
        .map(|i| {
            let theta = angle + i as Real * core::f32::consts::TAU / n as Real;
            center + Vector::new(theta.cos(), theta.sin()) * radius
        })
        .collect();

    ConvexPolygon::from_convex_polyline(points).unwrap()
}

#[test]
fn mtv_resolves_overlap() {
    let mut rng = oorandom::Rand32::new(42);
    let mut num_overlaps = 0;

    for _ in 0..1000 {
        let p1 = random_polygon(&mut rng);
        let p2 = random_polygon(&mut rng);

        let Some(mtv) = sat::polygons_overlap_mtv(p1.points(), p2.points()) else {
            continue;
        };
        num_overlaps += 1;

        assert!(mtv.depth >= 0.0);
        assert_relative_eq!(mtv.direction.norm(), 1.0, epsilon = 1.0e-5);

        // Moving the first polygon backward along the direction leaves both polygons touching.
        let shift = -mtv.translation();
        let moved: Vec<_> = p1.points().iter().map(|pt| pt + shift).collect();

        if let Some(remaining) = sat::polygons_overlap_mtv(&moved, p2.points()) {
            assert!(remaining.depth <= 1.0e-3, "{p1:?} {p2:?} {mtv:?}");
        }
    }

    assert!(num_overlaps > 100);
}

#[test]
fn queries_are_symmetric() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let p1 = random_polygon(&mut rng);
        let p2 = random_polygon(&mut rng);
        let (s1, s2) = (p1.as_shape(), p2.as_shape());

        let sep12 = query::separation(&s1, &s2);
        let sep21 = query::separation(&s2, &s1);

        assert_eq!(sep12.map(|s| s.depth), sep21.map(|s| s.depth));

        // Unless both polygons give the same depth, the swapped query picks the same normal.
        let pass1 = sat::polygon_polygon_find_mtv_oneway(p1.points(), p2.points());
        let pass2 = sat::polygon_polygon_find_mtv_oneway(p2.points(), p1.points());
        if let (Some(sep12), Some(sep21)) = (sep12, sep21) {
            if pass1.depth != pass2.depth {
                assert_eq!(sep12.direction, -sep21.direction);
                assert_eq!(sep21, sep12.flipped());
            }
        }
        assert_eq!(query::intersection_test(&s1, &s2), sep12.is_some());
        assert_eq!(
            query::intersection_test(&s1, &s2),
            query::intersection_test(&s2, &s1)
        );
    }
}

#[test]
fn queries_are_deterministic() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..100 {
        let p1 = random_polygon(&mut rng);
        let p2 = random_polygon(&mut rng);

        let first = sat::polygons_overlap_mtv(p1.points(), p2.points());
        let second = sat::polygons_overlap_mtv(p1.points(), p2.points());
        assert_eq!(
            first.map(|s| (s.direction.x.to_bits(), s.direction.y.to_bits(), s.depth.to_bits())),
            second.map(|s| (s.direction.x.to_bits(), s.direction.y.to_bits(), s.depth.to_bits()))
        );
    }
}

#[test]
fn unit_squares() {
    let s1 = Rectangle::from_half_extents(Point::new(0.5, 0.5), Vector::new(0.5, 0.5));
    let s2 = Rectangle::from_half_extents(Point::new(1.0, 1.0), Vector::new(0.5, 0.5));
    let s3 = Rectangle::from_half_extents(Point::new(2.5, 2.5), Vector::new(0.5, 0.5));

    let mtv = sat::polygons_overlap_mtv(s1.vertices(), s2.vertices()).unwrap();
    assert_eq!(mtv.depth, 0.5);
    assert!(mtv.direction == Vector::x() || mtv.direction == Vector::y());

    assert!(sat::polygons_overlap_mtv(s1.vertices(), s3.vertices()).is_none());
    assert!(!s1.overlaps(&s3.as_shape()));
}
