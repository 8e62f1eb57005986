use crate::math::{Point, Real};

/// Iterates through the edges of a polygon, as pairs of endpoints.
///
/// The `i`-th edge goes from the vertex `i - 1` to the vertex `i`. The first edge therefore
/// closes the polygon by joining its last vertex to its first one.
#[inline]
pub fn polygon_edges(
    vertices: &[Point<Real>],
) -> impl Iterator<Item = (&Point<Real>, &Point<Real>)> + Clone + '_ {
    vertices
        .iter()
        .cycle()
        .skip(vertices.len().saturating_sub(1))
        .zip(vertices.iter())
}

#[cfg(test)]
mod tests {
    use super::polygon_edges;
    use crate::math::Point;

    #[test]
    fn edges_wrap_around() {
        let tri = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        let mut edges = polygon_edges(&tri);

        assert_eq!(edges.next(), Some((&tri[2], &tri[0])));
        assert_eq!(edges.next(), Some((&tri[0], &tri[1])));
        assert_eq!(edges.next(), Some((&tri[1], &tri[2])));
        assert_eq!(edges.next(), None);
    }

    #[test]
    fn no_edges_for_empty_polygon() {
        assert_eq!(polygon_edges(&[]).count(), 0);
    }
}
