//! Rasterizing component bodies onto the lattice.

use schemroute_core::GridCoord;

use crate::footprint::Obstacle;
use crate::obstacle_set::ObstacleSet;

/// Build the occupancy set for a collection of component bodies.
///
/// Each body's center is quantized to its nearest cell and every cell
/// within its half-extents (rounded up, see
/// [`Footprint::half_extents`](crate::Footprint::half_extents)) is marked.
/// Overlapping bodies simply share cells. The result depends only on the
/// input sequence and `pitch`.
///
/// ```
/// use schemroute_core::GridCoord;
/// use schemroute_grid::{build, Footprint, Obstacle};
///
/// let resistor = Obstacle::new(0.0, 0.0, Footprint::new(80.0, 20.0));
/// let map = build([resistor], 10.0);
/// assert_eq!(map.len(), 9 * 3);
/// assert!(map.contains(GridCoord::new(-4, 1)));
/// assert!(!map.contains(GridCoord::new(5, 0)));
/// ```
pub fn build<I>(obstacles: I, pitch: f64) -> ObstacleSet
where
    I: IntoIterator<Item = Obstacle>,
{
    let mut set = ObstacleSet::new();
    let mut bodies = 0usize;
    for obstacle in obstacles {
        let center = GridCoord::from_point(obstacle.center, pitch);
        let (hw, hh) = obstacle.footprint.half_extents(pitch);
        set.insert_rect(
            GridCoord::new(center.x.saturating_sub(hw), center.y.saturating_sub(hh)),
            GridCoord::new(center.x.saturating_add(hw), center.y.saturating_add(hh)),
        );
        bodies += 1;
    }
    tracing::trace!(bodies, cells = set.len(), "built obstacle map");
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Footprint;
    use proptest::prelude::*;

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(build(std::iter::empty(), 10.0).is_empty());
    }

    #[test]
    fn off_grid_center_is_quantized() {
        let map = build([Obstacle::new(14.0, 26.0, Footprint::new(0.0, 0.0))], 10.0);
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![GridCoord::new(1, 3)]);
    }

    #[test]
    fn overlapping_bodies_share_cells() {
        let f = Footprint::new(20.0, 20.0);
        let map = build([Obstacle::new(0.0, 0.0, f), Obstacle::new(10.0, 0.0, f)], 10.0);
        // 3x3 at x=-1..=1 and 3x3 at x=0..=2 overlap in two columns.
        assert_eq!(map.len(), 4 * 3);
    }

    #[test]
    fn pitch_scales_coverage() {
        let body = Obstacle::new(0.0, 0.0, Footprint::new(40.0, 40.0));
        assert_eq!(build([body], 10.0).len(), 5 * 5);
        assert_eq!(build([body], 20.0).len(), 3 * 3);
    }

    proptest! {
        #[test]
        fn body_is_never_under_covered(
            cx in -50i32..50, cy in -50i32..50,
            w in 0.0f64..200.0, h in 0.0f64..200.0,
            fx in 0.0f64..1.0, fy in 0.0f64..1.0,
        ) {
            let center_x = f64::from(cx) * 10.0;
            let center_y = f64::from(cy) * 10.0;
            let map = build([Obstacle::new(center_x, center_y, Footprint::new(w, h))], 10.0);
            // Any point inside the body quantizes to an occupied cell.
            let px = center_x - w / 2.0 + fx * w;
            let py = center_y - h / 2.0 + fy * h;
            let cell = GridCoord::from_point(schemroute_core::Point::new(px, py), 10.0);
            prop_assert!(map.contains(cell), "{} not covered", cell);
        }

        #[test]
        fn build_is_deterministic(
            bodies in proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0, 0.0f64..60.0), 0..8)
        ) {
            let obstacles: Vec<Obstacle> = bodies
                .iter()
                .map(|&(x, y, s)| Obstacle::new(x, y, Footprint::new(s, s / 2.0)))
                .collect();
            let a = build(obstacles.clone(), 10.0);
            let b = build(obstacles, 10.0);
            prop_assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
        }
    }
}
