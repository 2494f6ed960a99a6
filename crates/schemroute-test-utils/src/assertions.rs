//! Geometric checks on routed polylines.
//!
//! These panic with a descriptive message on failure, like the `assert_*`
//! macros they are used next to.

use schemroute_core::{Endpoint, GridCoord, Polyline};
use schemroute_grid::Blocking;

/// Expand a polyline back into every lattice cell it passes through.
///
/// Vertices are quantized at `pitch`; consecutive quantized vertices must
/// share a row or a column.
pub fn route_cells(polyline: &Polyline, pitch: f64) -> Vec<GridCoord> {
    let vertices: Vec<GridCoord> = polyline
        .points()
        .iter()
        .map(|&p| GridCoord::from_point(p, pitch))
        .collect();
    let mut cells = Vec::new();
    if let Some(&first) = vertices.first() {
        cells.push(first);
    }
    for w in vertices.windows(2) {
        let (a, b) = (w[0], w[1]);
        assert!(
            a.x == b.x || a.y == b.y,
            "segment {a} -> {b} is not axis-aligned on the lattice"
        );
        let steps = a.x.abs_diff(b.x) + a.y.abs_diff(b.y);
        let (sx, sy) = ((b.x - a.x).signum(), (b.y - a.y).signum());
        for i in 1..=steps as i32 {
            cells.push(GridCoord::new(a.x + sx * i, a.y + sy * i));
        }
    }
    cells
}

/// Every segment is horizontal or vertical.
pub fn assert_orthogonal(polyline: &Polyline) {
    for (a, b) in polyline.segments() {
        assert!(
            a.x == b.x || a.y == b.y,
            "diagonal segment {a} -> {b} in {}",
            polyline.to_svg_path()
        );
    }
}

/// The polyline starts and ends exactly at the endpoint positions.
pub fn assert_endpoints_exact(polyline: &Polyline, start: &Endpoint, end: &Endpoint) {
    assert_eq!(polyline.start(), Some(start.position), "route start");
    if start.position != end.position {
        assert_eq!(polyline.end(), Some(end.position), "route end");
    }
}

/// No repeated vertices and no three consecutive collinear vertices.
pub fn assert_no_collinear(polyline: &Polyline) {
    let pts = polyline.points();
    for w in pts.windows(2) {
        assert_ne!(w[0], w[1], "repeated vertex in {}", polyline.to_svg_path());
    }
    for w in pts.windows(3) {
        let shared_x = w[0].x == w[1].x && w[1].x == w[2].x;
        let shared_y = w[0].y == w[1].y && w[1].y == w[2].y;
        assert!(
            !(shared_x || shared_y),
            "collinear vertices {} {} {} in {}",
            w[0],
            w[1],
            w[2],
            polyline.to_svg_path()
        );
    }
}

/// Every cell the route passes through is free in `blocked`, except the
/// cells listed in `allowed`.
pub fn assert_avoids<B: Blocking + ?Sized>(
    polyline: &Polyline,
    pitch: f64,
    blocked: &B,
    allowed: &[GridCoord],
) {
    for cell in route_cells(polyline, pitch) {
        assert!(
            !blocked.is_blocked(cell) || allowed.contains(&cell),
            "route {} enters blocked cell {cell}",
            polyline.to_svg_path()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemroute_core::Point;

    #[test]
    fn route_cells_walks_every_step() {
        let line = Polyline::new(vec![
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, -20.0),
        ]);
        let cells = route_cells(&line, 10.0);
        let expected: Vec<GridCoord> = [(0, 0), (1, 0), (2, 0), (2, -1), (2, -2)]
            .into_iter()
            .map(GridCoord::from)
            .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    #[should_panic(expected = "collinear")]
    fn collinear_triple_is_flagged() {
        let line = Polyline::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
        ]);
        assert_no_collinear(&line);
    }
}
