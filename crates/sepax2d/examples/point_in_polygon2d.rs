use sepax2d::math::Point;
use sepax2d::query::sat::{self, Axis};

fn main() {
    let hexagon = [
        Point::new(1.0, 0.0),
        Point::new(0.5, 0.866),
        Point::new(-0.5, 0.866),
        Point::new(-1.0, 0.0),
        Point::new(-0.5, -0.866),
        Point::new(0.5, -0.866),
    ];
    let axes: Vec<Axis> = Axis::edge_normals(&hexagon).collect();

    let inside = Point::new(0.2, 0.3);
    let outside = Point::new(0.9, 0.9);

    assert!(sat::polygon_contains(&hexagon, &inside, &axes));
    assert!(!sat::polygon_contains(&hexagon, &outside, &axes));

    // Vertices are on the boundary, and the boundary belongs to the polygon.
    assert!(hexagon
        .iter()
        .all(|pt| sat::polygon_contains(&hexagon, pt, &axes)));
}
