use sepax2d::math::{Point, Real, Vector};
use sepax2d::query::sat::{Axis, Projection};

fn random_projection(rng: &mut oorandom::Rand32) -> Projection {
    let a = rng.rand_float() * 20.0 - 10.0;
    let b = rng.rand_float() * 20.0 - 10.0;
    Projection::new(a.min(b), a.max(b))
}

#[test]
fn projection_overlap_is_symmetric() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let p1 = random_projection(&mut rng);
        let p2 = random_projection(&mut rng);

        assert_eq!(p1.overlaps(&p2), p2.overlaps(&p1));
        assert_eq!(p1.distance(&p2), p2.distance(&p1));
        assert_eq!(
            p1.overlaps(&p2),
            p1.max() >= p2.min() && p2.max() >= p1.min(),
            "{p1:?} {p2:?}"
        );
    }
}

#[test]
fn touching_projections_overlap() {
    let p1 = Projection::new(0.0, 1.0);
    let p2 = Projection::new(1.0, 2.0);
    let p3 = Projection::new(1.5, 2.0);

    assert!(p1.overlaps(&p2));
    assert_eq!(p1.distance(&p2), 0.0);
    assert!(!p1.overlaps(&p3));
    assert_eq!(p1.distance(&p3), 0.5);
}

#[test]
fn projection_bounds_every_vertex() {
    let mut rng = oorandom::Rand32::new(42);
    let vertices: Vec<Point<Real>> = (0..32)
        .map(|_| Point::new(rng.rand_float() * 4.0 - 2.0, rng.rand_float() * 4.0 - 2.0))
        .collect();

    for _ in 0..100 {
        let axis = Axis::new(Vector::new(
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
        ));
        let proj = axis.project(&vertices);

        assert!(proj.min() <= proj.max());
        assert!(vertices.iter().all(|v| proj.contains(axis.coordinate(v))));
        assert!(vertices.iter().any(|v| axis.coordinate(v) == proj.min()));
        assert!(vertices.iter().any(|v| axis.coordinate(v) == proj.max()));
    }
}
