//! Seeded random scenes.
//!
//! Scenes are reproducible from their seed: the same seed always yields the
//! same bodies and the same wires, on every platform.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use schemroute_core::{Direction, Endpoint, Point};
use schemroute_grid::{build, Footprint, Obstacle, ObstacleSet};

/// Body sizes drawn from the builtin component catalog.
const FOOTPRINTS: [Footprint; 5] = [
    Footprint::new(80.0, 20.0),
    Footprint::new(40.0, 40.0),
    Footprint::new(60.0, 60.0),
    Footprint::new(100.0, 120.0),
    Footprint::new(40.0, 80.0),
];

const PITCH: f64 = 10.0;

/// A random placement of bodies plus wires between their pins.
#[derive(Clone, Debug)]
pub struct RandomScene {
    pub obstacles: Vec<Obstacle>,
    pub wires: Vec<(Endpoint, Endpoint)>,
}

impl RandomScene {
    /// Rasterize the bodies at pitch 10.
    pub fn obstacle_set(&self) -> ObstacleSet {
        build(self.obstacles.iter().copied(), PITCH)
    }
}

/// Generate a scene of `bodies` components on a `cols` x `rows` lattice
/// and `wires` connections.
///
/// Every position is a lattice point at pitch 10. Pins sit in the middle
/// of a body edge and face outward. About one wire in four ends at a free
/// point instead of a pin.
pub fn random_scene(seed: u64, bodies: usize, wires: usize, cols: i32, rows: i32) -> RandomScene {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let bodies = bodies.max(1);

    let obstacles: Vec<Obstacle> = (0..bodies)
        .map(|_| {
            let fp = FOOTPRINTS[rng.random_range(0..FOOTPRINTS.len())];
            let x = f64::from(rng.random_range(0..cols.max(1))) * PITCH;
            let y = f64::from(rng.random_range(0..rows.max(1))) * PITCH;
            Obstacle::new(x, y, fp)
        })
        .collect();

    let wires = (0..wires)
        .map(|_| {
            let a = &obstacles[rng.random_range(0..obstacles.len())];
            let start = edge_pin(a, &mut rng);
            let end = if rng.random_range(0..4) == 0 {
                let x = f64::from(rng.random_range(0..cols.max(1))) * PITCH;
                let y = f64::from(rng.random_range(0..rows.max(1))) * PITCH;
                Endpoint::free(x, y)
            } else {
                let b = &obstacles[rng.random_range(0..obstacles.len())];
                edge_pin(b, &mut rng)
            };
            (start, end)
        })
        .collect();

    RandomScene { obstacles, wires }
}

fn edge_pin(body: &Obstacle, rng: &mut ChaCha8Rng) -> Endpoint {
    let dir = Direction::ALL[rng.random_range(0..4)];
    let (dx, dy) = dir.vector();
    let offset = Point::new(
        f64::from(dx) * body.footprint.width / 2.0,
        f64::from(dy) * body.footprint.height / 2.0,
    );
    let at = body.center + offset;
    Endpoint::pin(at.x, at.y, dir)
}
