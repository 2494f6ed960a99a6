//! Hand-placed scenes for the reference routing scenarios.
//!
//! All fixtures use a pitch of 10 canvas units, so every coordinate below
//! is a lattice point.

use schemroute_core::{Direction, Endpoint, GridCoord};
use schemroute_grid::{Footprint, Obstacle, ObstacleSet};

/// Body of the library resistor: 80 wide, 20 tall.
pub const RESISTOR: Footprint = Footprint::new(80.0, 20.0);

/// A resistor body centered at `(x, y)`.
pub fn resistor_body(x: f64, y: f64) -> Obstacle {
    Obstacle::new(x, y, RESISTOR)
}

/// Two pins 100 units apart on `y = 0`, facing each other.
pub fn facing_pins() -> (Endpoint, Endpoint) {
    (
        Endpoint::pin(0.0, 0.0, Direction::Right),
        Endpoint::pin(100.0, 0.0, Direction::Left),
    )
}

/// A 20x60 body centered on the line between [`facing_pins`].
///
/// Occupies cells `x in 4..=6`, `y in -3..=3`, clear of both escape runs.
pub fn straddling_body() -> Obstacle {
    Obstacle::new(50.0, 0.0, Footprint::new(20.0, 60.0))
}

/// Two resistors side by side, wired output pin to input pin.
///
/// Returns the bodies plus the right pin of the first and the left pin of
/// the second.
pub fn resistor_pair() -> (Vec<Obstacle>, Endpoint, Endpoint) {
    let bodies = vec![resistor_body(0.0, 0.0), resistor_body(200.0, 0.0)];
    let out = Endpoint::pin(40.0, 0.0, Direction::Right);
    let inp = Endpoint::pin(160.0, 0.0, Direction::Left);
    (bodies, out, inp)
}

/// A hollow square ring of cells at Chebyshev distance `radius` from
/// `center`. Everything strictly inside is unreachable from outside.
pub fn enclosure(center: GridCoord, radius: i32) -> ObstacleSet {
    let mut ring = ObstacleSet::new();
    for d in -radius..=radius {
        ring.insert(GridCoord::new(center.x + d, center.y - radius));
        ring.insert(GridCoord::new(center.x + d, center.y + radius));
        ring.insert(GridCoord::new(center.x - radius, center.y + d));
        ring.insert(GridCoord::new(center.x + radius, center.y + d));
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosure_is_a_ring() {
        let ring = enclosure(GridCoord::new(0, 0), 2);
        assert_eq!(ring.len(), 16);
        assert!(!ring.contains(GridCoord::new(0, 0)));
        assert!(!ring.contains(GridCoord::new(1, 1)));
        assert!(ring.contains(GridCoord::new(2, -2)));
        assert!(ring.contains(GridCoord::new(-2, 0)));
    }

    #[test]
    fn straddling_body_cells() {
        let map = schemroute_grid::build([straddling_body()], 10.0);
        assert!(map.contains(GridCoord::new(5, 0)));
        assert!(map.contains(GridCoord::new(4, -3)));
        assert!(!map.contains(GridCoord::new(3, 0)));
        assert!(!map.contains(GridCoord::new(5, 4)));
    }
}
