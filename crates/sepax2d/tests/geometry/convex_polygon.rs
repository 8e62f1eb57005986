use sepax2d::math::{Isometry, Point, Vector};
use sepax2d::shape::{Circle, ConvexPolygon, ConvexPolygonError, Rectangle};

#[test]
fn invalid_polygons_are_reported() {
    let cw = vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 0.0),
    ];
    let err = ConvexPolygon::from_convex_polyline(cw).unwrap_err();

    assert_eq!(err, ConvexPolygonError::NotConvexCcw(0));
    assert_eq!(
        err.to_string(),
        "the polygon turns clockwise at the vertex 0: it must be convex and counter-clockwise."
    );
    assert_eq!(
        ConvexPolygon::from_convex_polyline(vec![]),
        Err(ConvexPolygonError::TooFewVertices(0))
    );
}

#[test]
fn convex_polygon_against_other_shapes() {
    let trapezoid = ConvexPolygon::from_convex_polyline(vec![
        Point::new(-2.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(-1.0, 1.0),
    ])
    .unwrap();

    let above = Circle::new(Point::new(0.0, 1.5), 0.75);
    let sep = trapezoid.separation(&above.as_shape()).unwrap();
    assert_eq!(sep.direction, Vector::y());
    assert_relative_eq!(sep.depth, 0.25);
    assert!(trapezoid.overlaps(&above.as_shape()));

    // Beyond the slanted right side, but within the bounding box of the trapezoid.
    let rect = Rectangle::from_half_extents(Point::new(2.0, 1.0), Vector::new(0.4, 0.4));
    assert!(!trapezoid.overlaps(&rect.as_shape()));
    assert!(trapezoid.separation(&rect.as_shape()).is_none());

    let moved = trapezoid.transformed(&Isometry::translation(0.5, 0.0));
    assert!(moved.overlaps(&rect.as_shape()));
    assert!(rect.overlaps(&moved.as_shape()));
    assert!(moved.separation(&rect.as_shape()).is_some());
}
