use sepax2d::math::{Isometry, Point, Vector};
use sepax2d::query::sat;
use sepax2d::shape::Rectangle;

fn main() {
    let ground = Rectangle::from_half_extents(Point::new(0.0, -1.0), Vector::new(10.0, 1.0));
    let mut crate_pos = Isometry::new(Vector::new(0.0, 0.4), 0.3);

    // Push the crate out of the ground until they only touch.
    for _ in 0..10 {
        let crate_box = Rectangle::from_isometry(Vector::new(0.5, 0.5), &crate_pos);

        let Some(mtv) = sat::polygons_overlap_mtv(crate_box.vertices(), ground.vertices()) else {
            break;
        };

        println!("depth: {}, direction: {:?}", mtv.depth, mtv.direction);
        crate_pos.append_translation_mut(&(-mtv.translation()).into());

        if mtv.depth <= 1.0e-5 {
            break;
        }
    }

    let crate_box = Rectangle::from_isometry(Vector::new(0.5, 0.5), &crate_pos);
    let lowest = crate_box
        .vertices()
        .iter()
        .map(|pt| pt.y)
        .fold(f32::MAX, f32::min);
    assert!(lowest.abs() <= 1.0e-4);
}
